//! Domain Entities
//!
//! - `StagedFile` - a local connector file ready to be pushed
//! - `ActionReport` - per-host outcomes of one fan-out action

mod action_report;
mod staged_file;

pub use action_report::{ActionReport, HostOutcome, HostReport};
pub use staged_file::StagedFile;
