//! suite-tally - test suite report aggregator
//!
//! Runs a list of test-suite executables one after another, classifies the
//! report each one prints and folds everything into a single
//! pass/fail/crash/ignore summary with a deterministic exit code. Meant as
//! the last step of a build pipeline.
//!
//! ## Report format
//!
//! A suite prints a report region bounded by `-----------------------`
//! lines. Each report line carries one of the markers `:PASS`, `:FAIL`,
//! `:IGNORE` or `:INFO`, and the suite exits with the number of `:FAIL`
//! lines. A suite whose output has no delimiter at all is counted as crashed.
//!
//! ## Usage
//!
//! ```bash
//! # Run and aggregate suites
//! suite-tally build/test_led.out build/test_spi.out
//!
//! # Unity-style output (results before the delimiter), no colour
//! suite-tally --layout leading --no-color build/*.out
//!
//! # Machine-readable summary
//! suite-tally --format json --output reports/summary.json build/*.out
//! ```
//!
//! Exit status is 0 when no suite crashed and no test failed, 1 otherwise.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

mod classifier;
mod cli;
mod config;
mod error;
mod executor;
mod models;
mod output;
mod results;
mod utils;

use classifier::Classifier;
use cli::Args;
use config::{AppConfig, EnvConfig};
use executor::{Aggregator, SuiteRunner};
use output::{ConsoleObserver, OutputFormat, ResultFormatter};
use results::ArtifactStore;
use utils::logger::{init_logger, LogLevel};

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let env = EnvConfig::load();
    let mut config = AppConfig::resolve(args.config.as_deref(), &env)?;
    args.apply(&mut config).context("Invalid command-line options")?;

    init_logger(LogLevel::from_str(&config.log_level).unwrap_or_default());
    if env.has_any() {
        debug!("Environment overrides applied: {:?}", env);
    }
    debug!("Effective configuration: {:?}", config);

    let formatter = build_formatter(&config);
    let aggregator = Aggregator::new(SuiteRunner::new(
        Classifier::new(&config.delimiter, config.layout),
        ArtifactStore::new(&config.report_extension),
    ));

    if formatter.shows_progress() {
        println!();
    }

    let mut observer = ConsoleObserver::new(&formatter, std::io::stdout());
    let summary = aggregator.run(&args.suites, &mut observer).await;

    println!("{}", formatter.format_summary(&summary));
    if formatter.shows_progress() {
        println!();
    }

    if let Some(path) = &args.output {
        results::export_summary(path, &summary)
            .with_context(|| format!("Failed to export summary to {}", path.display()))?;
    }

    std::process::exit(summary.exit_code);
}

fn build_formatter(config: &AppConfig) -> ResultFormatter {
    let format = OutputFormat::from_str(&config.format).unwrap_or(OutputFormat::Table);
    let formatter = ResultFormatter::new(format).passed_limit(config.passed_limit);
    if config.color {
        formatter
    } else {
        formatter.no_color()
    }
}
