//! Report artifact and summary persistence
//!
//! Writes each completed suite's raw output next to its executable and
//! exports run summaries.

mod storage;

pub use storage::{export_summary, ArtifactStore, DEFAULT_REPORT_EXTENSION};
