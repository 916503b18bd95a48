//! Data models for suite aggregation
//!
//! This module contains all data structures used throughout the application.

mod suite;
mod summary;
mod test_result;

pub use suite::{suite_name, SuiteOutcome, SuiteReport, SuiteRun};
pub use summary::{RunSummary, Tally};
pub use test_result::{Category, Notice};
