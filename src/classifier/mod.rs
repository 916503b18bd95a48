//! Suite output classification
//!
//! Locates the report region inside a suite's captured output and sorts each
//! report line into a [`Category`] by marker substring.

use serde::{Deserialize, Serialize};

use crate::models::{Category, Notice, SuiteReport};

/// Line bounding the machine-readable report region
pub const REPORT_DELIMITER: &str = "-----------------------";

/// Where the report lines sit relative to the delimiter
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportLayout {
    /// Report lines follow the first delimiter line
    #[default]
    Bounded,
    /// Report lines start at the top of the output and run up to the delimiter
    Leading,
}

impl ReportLayout {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bounded" => Some(ReportLayout::Bounded),
            "leading" | "unity" => Some(ReportLayout::Leading),
            _ => None,
        }
    }
}

/// Classify a line by the first marker in priority order it contains
pub fn classify_line(line: &str) -> Option<Category> {
    Category::PRIORITY
        .into_iter()
        .find(|category| line.contains(category.marker()))
}

/// Result of classifying one suite's output
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Classification {
    pub report: SuiteReport,
    /// Info and unparseable lines, in output order
    pub notices: Vec<Notice>,
}

/// Output classifier for a single report delimiter and layout
#[derive(Clone, Debug)]
pub struct Classifier {
    delimiter: String,
    layout: ReportLayout,
}

impl Classifier {
    pub fn new(delimiter: impl Into<String>, layout: ReportLayout) -> Self {
        Self {
            delimiter: delimiter.into(),
            layout,
        }
    }

    /// Whether the output contains a report at all; a suite without one crashed
    pub fn has_report(&self, output: &str) -> bool {
        output.contains(self.delimiter.as_str())
    }

    /// Whether some line of the output is exactly the delimiter
    pub fn has_delimiter_line(&self, output: &str) -> bool {
        output.lines().any(|line| line == self.delimiter)
    }

    /// Lines of the report region, in order
    pub fn report_region<'a>(&self, output: &'a str) -> Vec<&'a str> {
        let delimiter = self.delimiter.as_str();
        let mut lines = output.lines();

        if self.layout == ReportLayout::Bounded && !lines.any(|line| line == delimiter) {
            return Vec::new();
        }

        lines
            .take_while(|line| !line.is_empty() && *line != delimiter)
            .collect()
    }

    /// Sort the report region into tallies and notices
    pub fn classify(&self, output: &str) -> Classification {
        let mut classification = Classification::default();

        for line in self.report_region(output) {
            let report = &mut classification.report;
            match classify_line(line) {
                Some(Category::Pass) => report.passed.push(line.to_string()),
                Some(Category::Fail) => report.failed.push(line.to_string()),
                Some(Category::Ignore) => report.ignored.push(line.to_string()),
                Some(Category::Info) => classification.notices.push(Notice::Info {
                    line: line.to_string(),
                }),
                None => classification.notices.push(Notice::UnparseableLine {
                    line: line.to_string(),
                }),
            }
        }

        classification
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(REPORT_DELIMITER, ReportLayout::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDED: &str = "-----------------------\nT1:PASS\nT2:FAIL\n-----------------------\n";

    #[test]
    fn test_classify_line_priority() {
        assert_eq!(classify_line("t.c:3:test_a:PASS"), Some(Category::Pass));
        assert_eq!(classify_line("t.c:4:test_b:FAIL: expected 1"), Some(Category::Fail));
        assert_eq!(classify_line("t.c:5:test_c:IGNORE"), Some(Category::Ignore));
        assert_eq!(classify_line("t.c:6:test_d:INFO: note"), Some(Category::Info));
        assert_eq!(classify_line("garbage"), None);

        // PASS wins even when FAIL appears first in the line
        assert_eq!(classify_line("x:FAIL: message mentions :PASS"), Some(Category::Pass));
        assert_eq!(classify_line("x:INFO: then :IGNORE"), Some(Category::Ignore));
    }

    #[test]
    fn test_has_report() {
        let classifier = Classifier::default();
        assert!(classifier.has_report(BOUNDED));
        assert!(classifier.has_report("prefix ----------------------- suffix"));
        assert!(!classifier.has_report("Segmentation fault\n"));
        assert!(!classifier.has_report(""));
    }

    #[test]
    fn test_bounded_scenario() {
        let classification = Classifier::default().classify(BOUNDED);
        assert_eq!(classification.report.passed, vec!["T1:PASS"]);
        assert_eq!(classification.report.failed, vec!["T2:FAIL"]);
        assert!(classification.report.ignored.is_empty());
        assert!(classification.notices.is_empty());
    }

    #[test]
    fn test_lines_outside_region_not_tallied() {
        let output = "before:PASS\n-----------------------\nT1:IGNORE\n\nafter:FAIL\n";
        let classification = Classifier::default().classify(output);
        assert!(classification.report.passed.is_empty());
        assert!(classification.report.failed.is_empty());
        assert_eq!(classification.report.ignored, vec!["T1:IGNORE"]);

        let output = "-----------------------\nT1:PASS\n-----------------------\nT2:FAIL\n";
        let classification = Classifier::default().classify(output);
        assert_eq!(classification.report.passed, vec!["T1:PASS"]);
        assert!(classification.report.failed.is_empty());
    }

    #[test]
    fn test_info_and_unparseable_notices() {
        let output = "-----------------------\nT1:INFO: seeded\nwhat is this\nT2:PASS\n";
        let classification = Classifier::default().classify(output);
        assert_eq!(classification.report.passed, vec!["T2:PASS"]);
        assert_eq!(
            classification.notices,
            vec![
                Notice::Info {
                    line: "T1:INFO: seeded".to_string()
                },
                Notice::UnparseableLine {
                    line: "what is this".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_delimiter_only_as_substring() {
        // Report present but no delimiter line: nothing to classify
        let output = "noise -----------------------\nT1:PASS\n";
        let classifier = Classifier::default();
        assert!(classifier.has_report(output));
        assert!(!classifier.has_delimiter_line(output));
        assert_eq!(classifier.classify(output), Classification::default());

        let indented = "  -----------------------\nT1:PASS\n";
        assert!(!classifier.has_delimiter_line(indented));
        assert!(classifier.has_delimiter_line(BOUNDED));
        assert!(classifier.has_delimiter_line("-----------------------\r\n"));
    }

    #[test]
    fn test_leading_layout() {
        let output = "t.c:1:test_a:PASS\nt.c:2:test_b:FAIL: bad\n\n-----------------------\n2 Tests 1 Failures 0 Ignored\nFAIL\n";
        let classifier = Classifier::new(REPORT_DELIMITER, ReportLayout::Leading);
        let classification = classifier.classify(output);
        assert_eq!(classification.report.passed, vec!["t.c:1:test_a:PASS"]);
        assert_eq!(classification.report.failed, vec!["t.c:2:test_b:FAIL: bad"]);
        assert!(classification.notices.is_empty());
    }

    #[test]
    fn test_crlf_lines() {
        let output = "-----------------------\r\nT1:PASS\r\n-----------------------\r\n";
        let classification = Classifier::default().classify(output);
        assert_eq!(classification.report.passed, vec!["T1:PASS"]);
    }

    #[test]
    fn test_layout_from_str() {
        assert_eq!(ReportLayout::from_str("Bounded"), Some(ReportLayout::Bounded));
        assert_eq!(ReportLayout::from_str("unity"), Some(ReportLayout::Leading));
        assert_eq!(ReportLayout::from_str("sideways"), None);
    }
}
