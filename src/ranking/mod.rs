pub mod ranker;

pub use ranker::{DEFAULT_TOP_N, RankedEntry, RankedList, top_n};
