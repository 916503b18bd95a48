//! Tally and run summary models
//!
//! The tally accumulates classified lines across suites; the summary freezes
//! it together with per-suite records once every suite has run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use super::{Notice, SuiteOutcome, SuiteRun};

/// Accumulated results across all suites, in invocation order
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tally {
    pub crashed: Vec<String>,
    pub passed: Vec<String>,
    pub failed: Vec<String>,
    pub ignored: Vec<String>,
}

impl Tally {
    /// Fold one suite run into the tally
    pub fn absorb(mut self, run: &SuiteRun) -> Self {
        match &run.outcome {
            SuiteOutcome::Crashed { .. } => self.crashed.push(run.name.clone()),
            SuiteOutcome::Completed(report) => {
                self.passed.extend(report.passed.iter().cloned());
                self.failed.extend(report.failed.iter().cloned());
                self.ignored.extend(report.ignored.iter().cloned());
            }
        }
        self
    }

    /// Tests run: passed + failed + ignored
    pub fn total(&self) -> usize {
        self.passed.len() + self.failed.len() + self.ignored.len()
    }

    /// Pass percentage over non-ignored tests, `None` when nothing was run
    pub fn success_rate(&self) -> Option<f64> {
        let denominator = self.total() - self.ignored.len();
        if denominator == 0 {
            None
        } else {
            Some(self.passed.len() as f64 / denominator as f64 * 100.0)
        }
    }

    pub fn is_success(&self) -> bool {
        self.crashed.is_empty() && self.failed.is_empty()
    }
}

/// Condensed per-suite record kept in the summary
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SuiteRecord {
    pub name: String,
    pub path: PathBuf,
    pub crashed: bool,
    pub exit_code: Option<i32>,
    pub passed: usize,
    pub failed: usize,
    pub ignored: usize,
    pub warnings: usize,
    pub duration_ms: u64,
    /// Info lines and warnings raised for the suite, in output order
    pub notices: Vec<Notice>,
}

impl From<&SuiteRun> for SuiteRecord {
    fn from(run: &SuiteRun) -> Self {
        let (passed, failed, ignored) = run
            .report()
            .map(|r| (r.passed.len(), r.failed.len(), r.ignored.len()))
            .unwrap_or((0, 0, 0));

        Self {
            name: run.name.clone(),
            path: run.path.clone(),
            crashed: run.is_crashed(),
            exit_code: run.exit_code,
            passed,
            failed,
            ignored,
            warnings: run.notices.iter().filter(|n| n.is_warning()).count(),
            duration_ms: run.duration_ms,
            notices: run.notices.clone(),
        }
    }
}

/// Final result of an aggregation run
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RunSummary {
    pub generated_at: DateTime<Utc>,
    pub total: usize,
    pub success_rate: Option<f64>,
    pub exit_code: i32,
    pub tally: Tally,
    pub suites: Vec<SuiteRecord>,
}

impl RunSummary {
    pub fn new(tally: Tally, runs: &[SuiteRun]) -> Self {
        Self {
            generated_at: Utc::now(),
            total: tally.total(),
            success_rate: tally.success_rate(),
            exit_code: if tally.is_success() { 0 } else { 1 },
            suites: runs.iter().map(SuiteRecord::from).collect(),
            tally,
        }
    }

    pub fn is_success(&self) -> bool {
        self.exit_code == 0
    }

    /// No suites were supplied at all
    pub fn is_empty(&self) -> bool {
        self.suites.is_empty()
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} suites ({} crashed): {} tests, {} passed, {} failed, {} ignored",
            self.suites.len(),
            self.tally.crashed.len(),
            self.total,
            self.tally.passed.len(),
            self.tally.failed.len(),
            self.tally.ignored.len()
        )?;
        if let Some(rate) = self.success_rate {
            write!(f, " ({rate:.2}%)")?;
        }
        Ok(())
    }
}
