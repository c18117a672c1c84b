//! Logging and plain-text reports.

mod logging;
pub mod report;

pub use logging::setup_logging;
