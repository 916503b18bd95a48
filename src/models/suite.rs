//! Suite invocation models
//!
//! A suite is one executable test binary; a run records what happened when it
//! was invoked once.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Notice;

/// Derive the suite name from an executable path (file name without extension)
pub fn suite_name(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Tallied lines of a completed suite, in output order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuiteReport {
    pub passed: Vec<String>,
    pub failed: Vec<String>,
    pub ignored: Vec<String>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len() + self.ignored.len()
    }
}

/// Outcome of one suite invocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum SuiteOutcome {
    /// No report delimiter in the output, or the suite never started
    Crashed { reason: String },

    /// Report found and classified
    Completed(SuiteReport),
}

/// Record of a single suite invocation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteRun {
    pub name: String,
    pub path: PathBuf,
    pub exit_code: Option<i32>,
    pub duration_ms: u64,
    pub outcome: SuiteOutcome,
    pub notices: Vec<Notice>,
}

impl SuiteRun {
    /// Build a crashed run; the crash notice is recorded with it
    pub fn crashed(
        path: &Path,
        exit_code: Option<i32>,
        duration_ms: u64,
        reason: impl Into<String>,
    ) -> Self {
        let name = suite_name(path);
        let reason = reason.into();
        Self {
            notices: vec![Notice::SuiteCrashed {
                suite: name.clone(),
                reason: reason.clone(),
            }],
            name,
            path: path.to_path_buf(),
            exit_code,
            duration_ms,
            outcome: SuiteOutcome::Crashed { reason },
        }
    }

    pub fn is_crashed(&self) -> bool {
        matches!(self.outcome, SuiteOutcome::Crashed { .. })
    }

    /// Report of a completed run
    pub fn report(&self) -> Option<&SuiteReport> {
        match &self.outcome {
            SuiteOutcome::Completed(report) => Some(report),
            SuiteOutcome::Crashed { .. } => None,
        }
    }
}
