mod movie;
mod stats;

pub use movie::{parse_runtime_minutes, WatchedMovie};
pub use stats::SummaryStats;
