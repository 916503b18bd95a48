//! Line categories and run notices
//!
//! Defines the report markers a suite prints and the non-fatal diagnostics
//! raised while a suite's output is being processed.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Category of a single report line
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Pass,
    Fail,
    Ignore,
    Info,
}

impl Category {
    /// Categories in the order their markers are checked.
    ///
    /// A line carrying several markers belongs to the first category listed
    /// here, wherever the markers sit in the line.
    pub const PRIORITY: [Category; 4] = [
        Category::Pass,
        Category::Fail,
        Category::Ignore,
        Category::Info,
    ];

    /// Marker substring identifying the category
    pub fn marker(&self) -> &'static str {
        match self {
            Category::Pass => ":PASS",
            Category::Fail => ":FAIL",
            Category::Ignore => ":IGNORE",
            Category::Info => ":INFO",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::Pass => write!(f, "PASS"),
            Category::Fail => write!(f, "FAIL"),
            Category::Ignore => write!(f, "IGNORE"),
            Category::Info => write!(f, "INFO"),
        }
    }
}

/// Non-fatal diagnostic produced while running a suite
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notice {
    /// Informational line printed by the suite
    Info { line: String },

    /// Report line carrying none of the known markers
    UnparseableLine { line: String },

    /// Suite produced no report at all
    SuiteCrashed { suite: String, reason: String },

    /// Delimiter only appears inside a longer line, so no report lines were read
    DelimiterNotOnOwnLine { suite: String },

    /// Exit code disagrees with the number of failed lines found
    CountMismatch {
        suite: String,
        reported: Option<i32>,
        tracked: usize,
    },
}

impl Notice {
    /// Whether the notice should be treated as a warning
    pub fn is_warning(&self) -> bool {
        !matches!(self, Notice::Info { .. })
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Info { line } => write!(f, "{line}"),
            Notice::UnparseableLine { line } => write!(
                f,
                "Error parsing test output '{line}', ignoring line. Did the test crash?"
            ),
            Notice::SuiteCrashed { suite, reason } => write!(
                f,
                "Test suite {suite} crashed, test results not reported! ({reason})"
            ),
            Notice::DelimiterNotOnOwnLine { suite } => write!(
                f,
                "Suite {suite} printed the report delimiter inside another line, no test results were read.\nVerify test suite output manually!"
            ),
            Notice::CountMismatch {
                suite,
                reported,
                tracked,
            } => {
                match reported {
                    Some(code) => write!(
                        f,
                        "Suite {suite} reported {code} failed tests, but {tracked} were tracked by the test output."
                    )?,
                    None => write!(
                        f,
                        "Suite {suite} was terminated by a signal, but {tracked} failed tests were tracked by the test output."
                    )?,
                }
                write!(f, "\nVerify test suite output manually!")
            }
        }
    }
}
