pub mod orchestrator;

pub use orchestrator::{
    Dashboard, DimensionView, FileSource, TextSource, load_dimension, run, write_dashboard,
};
