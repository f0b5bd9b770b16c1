//! Checklist aggregation and cross-checklist summarization.

mod checklist;
mod summary;

pub use checklist::build_checklist;
pub use summary::{percent, HostRef, OpenCounts, StatusCounts, StigRollup, Summary, UniqueFinding};
