//! Environment variable configuration
//!
//! Provides environment variable overrides for configuration.

use std::env;

use crate::classifier::ReportLayout;
use crate::error::TallyError;

use super::AppConfig;

/// Environment variable prefix
const ENV_PREFIX: &str = "SUITE_TALLY";

/// Environment configuration from environment variables
#[derive(Clone, Debug, Default)]
pub struct EnvConfig {
    /// Config file from SUITE_TALLY_CONFIG
    pub config_file: Option<String>,
    /// Report extension from SUITE_TALLY_REPORT_EXT
    pub report_extension: Option<String>,
    /// Report layout from SUITE_TALLY_LAYOUT
    pub layout: Option<String>,
    /// Passed display limit from SUITE_TALLY_PASSED_LIMIT
    pub passed_limit: Option<usize>,
    /// Output format from SUITE_TALLY_FORMAT
    pub format: Option<String>,
    /// Log level from SUITE_TALLY_LOG_LEVEL
    pub log_level: Option<String>,
    /// Colour from SUITE_TALLY_COLOR
    pub color: Option<bool>,
    /// Presence of NO_COLOR
    pub no_color: bool,
}

impl EnvConfig {
    /// Load configuration from environment variables
    pub fn load() -> Self {
        Self {
            config_file: get_env("CONFIG"),
            report_extension: get_env("REPORT_EXT"),
            layout: get_env("LAYOUT"),
            passed_limit: get_env_parse("PASSED_LIMIT"),
            format: get_env("FORMAT"),
            log_level: get_env("LOG_LEVEL"),
            color: get_env_bool("COLOR"),
            no_color: env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()),
        }
    }

    /// Check if any environment variables are set
    pub fn has_any(&self) -> bool {
        self.config_file.is_some()
            || self.report_extension.is_some()
            || self.layout.is_some()
            || self.passed_limit.is_some()
            || self.format.is_some()
            || self.log_level.is_some()
            || self.color.is_some()
            || self.no_color
    }

    /// Overlay the set variables onto `config`
    pub fn apply(&self, config: &mut AppConfig) -> Result<(), TallyError> {
        if let Some(ext) = &self.report_extension {
            config.report_extension = ext.clone();
        }
        if let Some(layout) = &self.layout {
            config.layout = ReportLayout::from_str(layout).ok_or_else(|| {
                TallyError::Config(format!("{ENV_PREFIX}_LAYOUT: unknown layout '{layout}'"))
            })?;
        }
        if let Some(limit) = self.passed_limit {
            config.passed_limit = limit;
        }
        if let Some(format) = &self.format {
            config.format = format.clone();
        }
        if let Some(level) = &self.log_level {
            config.log_level = level.clone();
        }
        if let Some(color) = self.color {
            config.color = color;
        }
        if self.no_color {
            config.color = false;
        }
        Ok(())
    }
}

/// Get environment variable with prefix
fn get_env(name: &str) -> Option<String> {
    env::var(format!("{ENV_PREFIX}_{name}")).ok()
}

/// Get environment variable and parse to type
fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    get_env(name).and_then(|v| v.parse().ok())
}

/// Get environment variable as boolean
fn get_env_bool(name: &str) -> Option<bool> {
    get_env(name).map(|v| {
        matches!(
            v.to_lowercase().as_str(),
            "1" | "true" | "yes" | "on" | "enabled"
        )
    })
}
