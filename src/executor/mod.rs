//! Suite execution engine
//!
//! Runs suites one at a time and folds their results into a tally.

mod aggregate;
mod runner;

pub use aggregate::{Aggregator, RunObserver};
pub use runner::SuiteRunner;
