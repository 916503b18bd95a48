//! Output formatters for run results
//!
//! Provides the console table, JSON, and brief summary formats.

use std::fmt::Write as _;

use crate::models::{Notice, RunSummary};

use super::{AnsiStyle, PlainStyle, Style, Tone};

/// Passed lines listed individually up to this count
pub const DEFAULT_PASSED_LIMIT: usize = 50;

/// Output format options
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Table,
    Json,
    JsonPretty,
    Summary,
}

impl OutputFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            "json-pretty" | "jsonpretty" => Some(OutputFormat::JsonPretty),
            "summary" => Some(OutputFormat::Summary),
            _ => None,
        }
    }
}

/// Result formatter
pub struct ResultFormatter {
    format: OutputFormat,
    style: Box<dyn Style>,
    passed_limit: usize,
}

impl ResultFormatter {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            style: Box::new(AnsiStyle),
            passed_limit: DEFAULT_PASSED_LIMIT,
        }
    }

    pub fn no_color(self) -> Self {
        self.with_style(PlainStyle)
    }

    pub fn with_style(mut self, style: impl Style + 'static) -> Self {
        self.style = Box::new(style);
        self
    }

    pub fn passed_limit(mut self, limit: usize) -> Self {
        self.passed_limit = limit;
        self
    }

    /// Whether per-suite progress belongs on the console
    pub fn shows_progress(&self) -> bool {
        self.format == OutputFormat::Table
    }

    fn paint(&self, tone: Tone, text: &str) -> String {
        self.style.paint(tone, text)
    }

    pub fn format_suite_start(&self, name: &str) -> String {
        format!("Running test suite {name}...")
    }

    /// Format a notice raised while running a suite
    pub fn format_notice(&self, notice: &Notice) -> String {
        let tone = match notice {
            Notice::Info { .. } => Tone::Info,
            Notice::UnparseableLine { .. }
            | Notice::DelimiterNotOnOwnLine { .. }
            | Notice::CountMismatch { .. } => Tone::Warn,
            Notice::SuiteCrashed { .. } => Tone::Err,
        };
        self.paint(tone, &notice.to_string())
    }

    /// Format the final run summary
    pub fn format_summary(&self, summary: &RunSummary) -> String {
        match self.format {
            OutputFormat::Table => self.format_summary_table(summary),
            OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
            OutputFormat::JsonPretty => serde_json::to_string_pretty(summary).unwrap_or_default(),
            OutputFormat::Summary => self.format_summary_brief(summary),
        }
    }

    fn format_summary_table(&self, summary: &RunSummary) -> String {
        if summary.is_empty() {
            return "No test suites specified.".to_string();
        }

        let tally = &summary.tally;
        let crashes = tally.crashed.len();
        let mut output = String::new();

        output.push_str("\n\n============= Summary =============\n");

        if crashes != 0 {
            let warning = format!(
                "Warning! {crashes} test suite(s) crashed. Not all tests were performed!"
            );
            let _ = writeln!(output, "{}", self.paint(Tone::Err, &warning));
        }

        let _ = writeln!(output, "Ran {} tests.", summary.total);
        let _ = writeln!(
            output,
            "{}",
            self.paint(Tone::Err, &format!("Failed: {}", tally.failed.len()))
        );
        let _ = writeln!(
            output,
            "{}",
            self.paint(Tone::Ok, &format!("Passed: {}", tally.passed.len()))
        );
        let _ = writeln!(
            output,
            "{}",
            self.paint(Tone::Warn, &format!("Ignore: {}", tally.ignored.len()))
        );

        if let Some(rate) = summary.success_rate {
            let _ = writeln!(output, "Success rate (without ignored tests): {rate:.2}%");
        }

        output.push_str("\n============ Breakdown ============\n");

        if crashes != 0 {
            let _ = writeln!(output, "Crashed test suites ({crashes}):");
            for suite in &tally.crashed {
                let _ = writeln!(output, "{}", self.paint(Tone::Err, suite));
            }
            output.push('\n');
        }

        let _ = writeln!(output, "Failed ({}):", tally.failed.len());
        for line in &tally.failed {
            let _ = writeln!(output, "{}", self.paint(Tone::Err, line));
        }
        output.push('\n');

        let _ = writeln!(output, "Ignored ({}):", tally.ignored.len());
        for line in &tally.ignored {
            let _ = writeln!(output, "{}", self.paint(Tone::Warn, line));
        }
        output.push('\n');

        let _ = writeln!(output, "Passed ({}):", tally.passed.len());
        if tally.passed.len() <= self.passed_limit {
            for line in &tally.passed {
                let _ = writeln!(output, "{line}");
            }
        } else {
            output.push_str("...\n");
        }

        output.push_str("===================================\n");
        let verdict = if summary.is_success() {
            self.paint(Tone::Ok, "All good! :)")
        } else {
            self.paint(Tone::Warn, "There is some work left to do...")
        };
        let _ = writeln!(output, "{verdict}");

        output
    }

    fn format_summary_brief(&self, summary: &RunSummary) -> String {
        if summary.is_empty() {
            return "No test suites specified.".to_string();
        }

        let verdict = if summary.is_success() {
            self.paint(Tone::Ok, "OK")
        } else {
            self.paint(Tone::Err, "FAILED")
        };
        format!("{verdict}: {summary}")
    }
}

impl Default for ResultFormatter {
    fn default() -> Self {
        Self::new(OutputFormat::Table)
    }
}
