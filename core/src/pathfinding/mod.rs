pub mod bfs;
pub mod utils;

pub use bfs::ConnectionSearch;
pub use utils::{ConnectionPath, Hop, SearchOutcome, SearchPhase, SearchReport, SearchStats};
