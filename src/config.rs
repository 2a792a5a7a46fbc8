use std::path::PathBuf;

use crate::error::Error;
use crate::ranking::DEFAULT_TOP_N;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub party_file: PathBuf,
    pub company_file: PathBuf,
    pub top_n: usize,
}

impl Config {
    /// Build from the full argument list, program name included:
    /// `<program> <party-file> <company-file> [top-n]`.
    pub fn from_args(args: &[String]) -> Result<Self, Error> {
        let program = args.first().map(String::as_str).unwrap_or("donation-engine");
        let usage = || {
            Error::Usage(format!(
                "Usage: {} <party-file> <company-file> [top-n]",
                program
            ))
        };

        if args.len() != 3 && args.len() != 4 {
            return Err(usage());
        }

        let top_n = match args.get(3) {
            Some(raw) => raw.trim().parse::<usize>().map_err(|_| usage())?,
            None => DEFAULT_TOP_N,
        };

        Ok(Self {
            party_file: PathBuf::from(&args[1]),
            company_file: PathBuf::from(&args[2]),
            top_n,
        })
    }
}
