//! Sequential aggregation over a list of suites
//!
//! Each suite is run to completion before the next one starts; results are
//! folded into a [`Tally`] in input order.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::models::{RunSummary, SuiteRun, Tally};

use super::SuiteRunner;

/// Receives progress as suites are run
pub trait RunObserver {
    /// Called before a suite is spawned
    fn suite_started(&mut self, _path: &Path, _name: &str) {}

    /// Called once a suite has been run and classified
    fn suite_finished(&mut self, _run: &SuiteRun) {}
}

/// Observer that ignores all progress
impl RunObserver for () {}

/// Runs every suite in order and builds the run summary
pub struct Aggregator {
    runner: SuiteRunner,
}

impl Aggregator {
    pub fn new(runner: SuiteRunner) -> Self {
        Self { runner }
    }

    /// One fold step: run a suite and extend the tally with its result
    pub async fn step(&self, tally: Tally, path: &Path) -> (Tally, SuiteRun) {
        let run = self.runner.run(path).await;
        (tally.absorb(&run), run)
    }

    /// Run all suites and summarize
    pub async fn run(&self, paths: &[PathBuf], observer: &mut dyn RunObserver) -> RunSummary {
        info!("Aggregating {} test suites", paths.len());

        let mut tally = Tally::default();
        let mut runs = Vec::with_capacity(paths.len());

        for path in paths {
            observer.suite_started(path, &crate::models::suite_name(path));
            let (next, run) = self.step(tally, path).await;
            observer.suite_finished(&run);
            tally = next;
            runs.push(run);
        }

        let summary = RunSummary::new(tally, &runs);
        info!("{}", summary);
        summary
    }
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::new(SuiteRunner::default())
    }
}
