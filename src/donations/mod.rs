pub mod donation;

pub use donation::{Dimension, DonationRecord, entity_name, parse_amount};
