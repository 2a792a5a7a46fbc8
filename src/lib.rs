pub mod config;
pub mod donations;
pub mod engine;
pub mod error;
pub mod orchestrator;
pub mod parser;
pub mod presentation;
pub mod ranking;

pub use config::Config;
pub use donations::{Dimension, DonationRecord};
pub use engine::{Aggregation, aggregate};
pub use error::Error;
pub use orchestrator::{Dashboard, run};
pub use parser::parse;
pub use ranking::{RankedEntry, RankedList, top_n};
