pub mod chart;

pub use chart::{ChartRow, ChartSeries, format_inr};
