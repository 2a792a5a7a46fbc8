pub mod engine;

pub use engine::{Aggregation, aggregate};
