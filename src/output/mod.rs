//! Output formatting module
//!
//! Turns notices and run summaries into console text. Colour is supplied by a
//! [`Style`] so the aggregation code never sees escape sequences.

mod console;
mod formatter;
mod style;

pub use console::ConsoleObserver;
pub use formatter::{OutputFormat, ResultFormatter, DEFAULT_PASSED_LIMIT};
pub use style::{AnsiStyle, PlainStyle, Style, Tone};
