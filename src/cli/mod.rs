//! CLI argument parsing
//!
//! Defines command-line interface using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::classifier::ReportLayout;
use crate::config::AppConfig;
use crate::error::TallyError;

/// Aggregate test-suite binary reports into a single pass/fail verdict
#[derive(Parser, Debug)]
#[command(name = "suite-tally")]
#[command(author = "hephaex@gmail.com")]
#[command(version)]
#[command(about = "Run test suites and aggregate their reports")]
#[command(long_about = None)]
pub struct Args {
    /// Test suite executables, run in the given order
    pub suites: Vec<PathBuf>,

    /// Configuration file (YAML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output format (table, json, json-pretty, summary)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,

    /// Extension of the report file written beside each suite
    #[arg(long)]
    pub report_ext: Option<String>,

    /// List passed tests individually up to this count
    #[arg(long)]
    pub passed_limit: Option<usize>,

    /// Report layout (bounded, leading)
    #[arg(long)]
    pub layout: Option<String>,

    /// Export the run summary to a file (.json, .yaml)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Overlay command-line flags onto `config`
    pub fn apply(&self, config: &mut AppConfig) -> Result<(), TallyError> {
        if let Some(format) = &self.format {
            config.format = format.clone();
        }
        if self.no_color {
            config.color = false;
        }
        if let Some(ext) = &self.report_ext {
            config.report_extension = ext.clone();
        }
        if let Some(limit) = self.passed_limit {
            config.passed_limit = limit;
        }
        if let Some(layout) = &self.layout {
            config.layout = ReportLayout::from_str(layout)
                .ok_or_else(|| TallyError::Config(format!("unknown layout '{layout}'")))?;
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if self.verbose {
            config.log_level = "debug".to_string();
        }
        config.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parsing() {
        let args = Args::parse_from([
            "suite-tally",
            "build/test_a.out",
            "build/test_b.out",
            "--no-color",
        ]);
        assert_eq!(
            args.suites,
            vec![
                PathBuf::from("build/test_a.out"),
                PathBuf::from("build/test_b.out")
            ]
        );
        assert!(args.no_color);
        assert!(args.format.is_none());
    }

    #[test]
    fn test_no_suites() {
        let args = Args::parse_from(["suite-tally"]);
        assert!(args.suites.is_empty());
    }

    #[test]
    fn test_apply_flags() {
        let args = Args::parse_from([
            "suite-tally",
            "--format",
            "json",
            "--layout",
            "leading",
            "--passed-limit",
            "3",
            "--report-ext",
            "log",
            "-v",
            "t.out",
        ]);
        let mut config = AppConfig::default();
        args.apply(&mut config).unwrap();

        assert_eq!(config.format, "json");
        assert_eq!(config.layout, ReportLayout::Leading);
        assert_eq!(config.passed_limit, 3);
        assert_eq!(config.report_extension, "log");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_apply_rejects_bad_format() {
        let args = Args::parse_from(["suite-tally", "--format", "xml"]);
        let mut config = AppConfig::default();
        assert!(args.apply(&mut config).is_err());
    }
}
