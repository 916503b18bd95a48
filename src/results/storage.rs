//! Report artifact storage
//!
//! Completed suites get their captured stdout written verbatim to a sibling
//! file of the executable. Files are overwritten on every run and never read
//! back.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::error::TallyError;
use crate::models::RunSummary;

/// Default extension of report artifacts
pub const DEFAULT_REPORT_EXTENSION: &str = "test";

/// Writes report artifacts beside suite executables
#[derive(Clone, Debug)]
pub struct ArtifactStore {
    extension: String,
}

impl ArtifactStore {
    pub fn new(extension: impl Into<String>) -> Self {
        let extension = extension.into();
        Self {
            extension: extension.trim_start_matches('.').to_string(),
        }
    }

    /// Artifact path for an executable: same path, extension replaced
    pub fn artifact_path(&self, executable: &Path) -> PathBuf {
        executable.with_extension(&self.extension)
    }

    /// Overwrite the artifact for `executable` with `output`
    pub async fn write(&self, executable: &Path, output: &[u8]) -> Result<PathBuf, TallyError> {
        let path = self.artifact_path(executable);
        tokio::fs::write(&path, output)
            .await
            .map_err(|e| TallyError::io(&path, e))?;

        debug!("Wrote {} bytes to {}", output.len(), path.display());
        Ok(path)
    }
}

impl Default for ArtifactStore {
    fn default() -> Self {
        Self::new(DEFAULT_REPORT_EXTENSION)
    }
}

/// Export format
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Json,
    Yaml,
}

impl ExportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "json" => Some(ExportFormat::Json),
            "yaml" | "yml" => Some(ExportFormat::Yaml),
            _ => None,
        }
    }

    pub fn from_extension(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_str)
    }
}

/// Export a run summary; the format follows the file extension, JSON by default
pub fn export_summary(path: &Path, summary: &RunSummary) -> Result<(), TallyError> {
    let content = match ExportFormat::from_extension(path).unwrap_or(ExportFormat::Json) {
        ExportFormat::Json => serde_json::to_string_pretty(summary)?,
        ExportFormat::Yaml => serde_yaml::to_string(summary)?,
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| TallyError::io(parent, e))?;
    }
    fs::write(path, content).map_err(|e| TallyError::io(path, e))?;

    info!("Exported summary to {}", path.display());
    Ok(())
}
