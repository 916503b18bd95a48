//! Configuration module
//!
//! Handles loading and managing configuration. Values are layered:
//! defaults, then a config file, then `SUITE_TALLY_*` environment variables,
//! then command-line flags.

mod env;

pub use env::EnvConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::classifier::{ReportLayout, REPORT_DELIMITER};
use crate::error::TallyError;
use crate::output::DEFAULT_PASSED_LIMIT;
use crate::results::DEFAULT_REPORT_EXTENSION;
use crate::utils::logger::LogLevel;

/// Configuration file locations (in order of precedence)
const CONFIG_LOCATIONS: &[&str] = &[
    "./suite-tally.yaml",
    "./suite-tally.yml",
    "./.suite-tally.yaml",
    "~/.config/suite-tally/config.yaml",
];

/// Application configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Line bounding the report region
    pub delimiter: String,

    /// Position of the report relative to the delimiter
    pub layout: ReportLayout,

    /// Extension of the report artifact written beside each suite
    pub report_extension: String,

    /// Passed lines listed individually up to this count
    pub passed_limit: usize,

    /// Colourize console output
    pub color: bool,

    /// Output format (table, json, json-pretty, summary)
    pub format: String,

    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            delimiter: REPORT_DELIMITER.to_string(),
            layout: ReportLayout::Bounded,
            report_extension: DEFAULT_REPORT_EXTENSION.to_string(),
            passed_limit: DEFAULT_PASSED_LIMIT,
            color: true,
            format: "table".to_string(),
            log_level: LogLevel::default().to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = if is_yaml_file(path) {
            serde_yaml::from_str(&content)
                .with_context(|| format!("Failed to parse YAML config: {}", path.display()))?
        } else {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path.display()))?
        };

        config.validate()?;
        Ok(config)
    }

    /// Find configuration file in standard locations
    pub fn find() -> Option<PathBuf> {
        CONFIG_LOCATIONS
            .iter()
            .map(|location| expand_path(location))
            .find(|path| path.exists())
    }

    /// Load from an explicit path, the environment, or the standard locations.
    /// Falls back to defaults when no file exists; environment overrides are applied last.
    pub fn resolve(explicit: Option<&Path>, env: &EnvConfig) -> Result<Self> {
        let path = explicit
            .map(Path::to_path_buf)
            .or_else(|| env.config_file.as_ref().map(PathBuf::from))
            .or_else(Self::find);

        let mut config = match path {
            Some(path) => Self::load(&path)?,
            None => Self::default(),
        };

        env.apply(&mut config)?;
        config.validate()?;
        Ok(config)
    }

    /// Check configuration values
    pub fn validate(&self) -> Result<(), TallyError> {
        if self.delimiter.is_empty() || self.delimiter.contains('\n') {
            return Err(TallyError::Config(
                "delimiter must be a single non-empty line".to_string(),
            ));
        }
        if self.report_extension.trim_start_matches('.').is_empty() {
            return Err(TallyError::Config(
                "report_extension must not be empty".to_string(),
            ));
        }
        if crate::output::OutputFormat::from_str(&self.format).is_none() {
            return Err(TallyError::Config(format!(
                "unknown output format '{}'",
                self.format
            )));
        }
        if LogLevel::from_str(&self.log_level).is_none() {
            return Err(TallyError::Config(format!(
                "unknown log level '{}'",
                self.log_level
            )));
        }
        Ok(())
    }
}

/// Expand ~ to home directory
fn expand_path(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Check if file is YAML based on extension
fn is_yaml_file(path: &Path) -> bool {
    path.extension()
        .map(|e| e == "yaml" || e == "yml")
        .unwrap_or(false)
}
