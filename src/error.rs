//! Error types for suite-tally
//!
//! Hard faults only. Crashed suites, unparseable lines and count mismatches
//! are [`Notice`](crate::models::Notice)s, not errors.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that stop an operation outright
#[derive(Error, Debug)]
pub enum TallyError {
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML serialization failed: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl TallyError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        TallyError::Io {
            path: path.into(),
            source,
        }
    }
}
