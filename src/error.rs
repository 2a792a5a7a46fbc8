use std::io;

use thiserror::Error;

/// Failures that reach the caller of a load. Malformed lines and unusable amounts are
/// absorbed by the parser and aggregator and never show up here.
#[derive(Debug, Error)]
pub enum Error {
    #[error("source {source_name} unavailable: {cause}")]
    SourceUnavailable {
        source_name: String,
        cause: io::Error,
    },
    #[error("{0}")]
    Usage(String),
    #[error("error writing CSV output: {0}")]
    Output(#[from] csv::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("no dimension could be loaded")]
    AllDimensionsFailed,
}
