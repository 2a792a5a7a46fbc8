use std::fs;
use std::io;
use std::panic;
use std::path::PathBuf;
use std::thread;

use csv::Writer;
use log::{error, info, warn};

use crate::config::Config;
use crate::donations::{Dimension, entity_name};
use crate::engine::{Aggregation, aggregate};
use crate::error::Error;
use crate::parser::parse;
use crate::presentation::ChartRow;
use crate::ranking::{RankedList, top_n};

/// Where the raw text of one dimension comes from.
pub trait TextSource: Sync {
    fn fetch_text(&self) -> Result<String, Error>;
}

pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TextSource for FileSource {
    fn fetch_text(&self) -> Result<String, Error> {
        fs::read_to_string(&self.path).map_err(|cause| Error::SourceUnavailable {
            source_name: self.path.display().to_string(),
            cause,
        })
    }
}

/// Result of one full parse, aggregate and rank pass.
#[derive(Debug, Clone, PartialEq)]
pub struct DimensionView {
    pub dimension: Dimension,
    pub record_count: usize,
    pub aggregation: Aggregation,
    pub ranked: RankedList,
}

pub fn load_dimension(
    dimension: Dimension,
    source: &dyn TextSource,
    n: usize,
) -> Result<DimensionView, Error> {
    let text = source.fetch_text()?;
    let records = parse(&text);
    let aggregation = aggregate(&records, entity_name);
    let ranked = top_n(&aggregation, n);

    info!(
        "{}: {} records, {} entities, top {} ranked",
        dimension.name(),
        records.len(),
        aggregation.len(),
        ranked.len()
    );

    Ok(DimensionView {
        dimension,
        record_count: records.len(),
        aggregation,
        ranked,
    })
}

/// Latest published view per dimension. A failed load never replaces what is already there.
#[derive(Debug, Default)]
pub struct Dashboard {
    party: Option<DimensionView>,
    company: Option<DimensionView>,
}

impl Dashboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self, dimension: Dimension) -> Option<&DimensionView> {
        match dimension {
            Dimension::Party => self.party.as_ref(),
            Dimension::Company => self.company.as_ref(),
        }
    }

    fn slot(&mut self, dimension: Dimension) -> &mut Option<DimensionView> {
        match dimension {
            Dimension::Party => &mut self.party,
            Dimension::Company => &mut self.company,
        }
    }

    pub fn load(
        &mut self,
        dimension: Dimension,
        source: &dyn TextSource,
        n: usize,
    ) -> Result<(), Error> {
        let outcome = load_dimension(dimension, source, n);
        self.publish(dimension, outcome)
    }

    /// Load both dimensions concurrently and publish each outcome on its own.
    /// Returns the failures, if any.
    pub fn load_all(
        &mut self,
        party: &dyn TextSource,
        company: &dyn TextSource,
        n: usize,
    ) -> Vec<(Dimension, Error)> {
        let (party_outcome, company_outcome) = thread::scope(|s| {
            let party_handle = s.spawn(move || load_dimension(Dimension::Party, party, n));
            let company_handle = s.spawn(move || load_dimension(Dimension::Company, company, n));
            (
                party_handle.join().unwrap_or_else(|e| panic::resume_unwind(e)),
                company_handle.join().unwrap_or_else(|e| panic::resume_unwind(e)),
            )
        });

        let mut failures = Vec::new();
        for (dimension, outcome) in [
            (Dimension::Party, party_outcome),
            (Dimension::Company, company_outcome),
        ] {
            if let Err(e) = self.publish(dimension, outcome) {
                failures.push((dimension, e));
            }
        }
        failures
    }

    fn publish(
        &mut self,
        dimension: Dimension,
        outcome: Result<DimensionView, Error>,
    ) -> Result<(), Error> {
        match outcome {
            Ok(view) => {
                *self.slot(dimension) = Some(view);
                Ok(())
            }
            Err(e) => {
                error!("{}: load failed, keeping previous data: {}", dimension.name(), e);
                Err(e)
            }
        }
    }
}

/// Write every published view as CSV: the "all" rows first, then the ranked "top" rows.
pub fn write_dashboard<W: io::Write>(dashboard: &Dashboard, writer: W) -> Result<(), Error> {
    let mut wtr = Writer::from_writer(writer);

    for dimension in Dimension::ALL {
        let Some(view) = dashboard.view(dimension) else {
            warn!("{}: no data to write", dimension.name());
            continue;
        };
        for row in ChartRow::all_rows(dimension, &view.aggregation) {
            wtr.serialize(row)?;
        }
        for row in ChartRow::top_rows(dimension, &view.ranked) {
            wtr.serialize(row)?;
        }
    }

    wtr.flush()?;
    Ok(())
}

pub fn run(config: &Config) -> Result<(), Error> {
    let party = FileSource::new(config.party_file.clone());
    let company = FileSource::new(config.company_file.clone());

    let mut dashboard = Dashboard::new();
    let failures = dashboard.load_all(&party, &company, config.top_n);

    write_dashboard(&dashboard, io::stdout())?;

    if failures.len() == Dimension::ALL.len() {
        return Err(Error::AllDimensionsFailed);
    }
    Ok(())
}
