pub mod config;
mod orchestrator;
mod types;

pub use orchestrator::run_merge;
pub use types::{MergeReport, PositionFailure};
