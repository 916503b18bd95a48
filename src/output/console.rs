//! Console progress output

use std::io::Write;
use std::path::Path;

use crate::executor::RunObserver;
use crate::models::SuiteRun;

use super::ResultFormatter;

/// Writes suite progress and notices as suites complete
pub struct ConsoleObserver<'a, W: Write> {
    formatter: &'a ResultFormatter,
    out: W,
}

impl<'a, W: Write> ConsoleObserver<'a, W> {
    pub fn new(formatter: &'a ResultFormatter, out: W) -> Self {
        Self { formatter, out }
    }
}

impl<W: Write> RunObserver for ConsoleObserver<'_, W> {
    fn suite_started(&mut self, _path: &Path, name: &str) {
        if self.formatter.shows_progress() {
            let _ = writeln!(self.out, "{}", self.formatter.format_suite_start(name));
        }
    }

    fn suite_finished(&mut self, run: &SuiteRun) {
        if !self.formatter.shows_progress() {
            return;
        }
        for notice in &run.notices {
            let _ = writeln!(self.out, "{}", self.formatter.format_notice(notice));
        }
    }
}
