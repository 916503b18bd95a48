//! Suite execution runner
//!
//! Spawns one suite, captures its stdout and turns it into a [`SuiteRun`].

use std::path::Path;
use std::process::Stdio;
use tokio::process::Command;
use tracing::{debug, info, warn};

use crate::classifier::{Classification, Classifier};
use crate::models::{suite_name, Notice, SuiteOutcome, SuiteRun};
use crate::results::ArtifactStore;
use crate::utils::timer::Timer;

/// Runs a single suite executable to completion
pub struct SuiteRunner {
    classifier: Classifier,
    store: ArtifactStore,
}

impl SuiteRunner {
    /// Create a new suite runner
    pub fn new(classifier: Classifier, store: ArtifactStore) -> Self {
        Self { classifier, store }
    }

    /// Run the suite at `path` with no arguments and classify its report.
    ///
    /// Never fails: a suite that cannot be spawned or prints no report is
    /// recorded as crashed.
    pub async fn run(&self, path: &Path) -> SuiteRun {
        let name = suite_name(path);
        let timer = Timer::start(format!("suite {name}"));

        info!("Running test suite {}", name);

        let output = match Command::new(path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .await
        {
            Ok(output) => output,
            Err(e) => {
                warn!("Failed to spawn {}: {}", path.display(), e);
                return SuiteRun::crashed(path, None, timer.stop(), format!("failed to start: {e}"));
            }
        };

        let exit_code = output.status.code();
        if !output.stderr.is_empty() {
            debug!(
                "{} wrote {} bytes to stderr",
                name,
                output.stderr.len()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        if !self.classifier.has_report(&stdout) {
            warn!("Test suite {} produced no report (exit {:?})", name, exit_code);
            return SuiteRun::crashed(path, exit_code, timer.stop(), "no report delimiter in output");
        }

        if let Err(e) = self.store.write(path, &output.stdout).await {
            warn!("Could not save report for {}: {}", name, e);
        }

        let Classification { report, mut notices } = self.classifier.classify(&stdout);

        for notice in &notices {
            match notice {
                Notice::Info { line } => info!("{}: {}", name, line),
                Notice::UnparseableLine { line } => {
                    warn!("{}: unparseable report line '{}'", name, line)
                }
                _ => {}
            }
        }

        if !self.classifier.has_delimiter_line(&stdout) {
            warn!("Suite {} printed the delimiter only inside another line", name);
            notices.insert(
                0,
                Notice::DelimiterNotOnOwnLine {
                    suite: name.clone(),
                },
            );
        }

        let tracked = report.failed.len();
        if exit_code != i32::try_from(tracked).ok() {
            warn!(
                "Suite {} exit code {:?} disagrees with {} failed lines",
                name, exit_code, tracked
            );
            notices.push(Notice::CountMismatch {
                suite: name.clone(),
                reported: exit_code,
                tracked,
            });
        }

        debug!(
            "{}: {} tests, {} passed, {} failed, {} ignored",
            name,
            report.total(),
            report.passed.len(),
            tracked,
            report.ignored.len()
        );

        SuiteRun {
            name,
            path: path.to_path_buf(),
            exit_code,
            duration_ms: timer.stop(),
            outcome: SuiteOutcome::Completed(report),
            notices,
        }
    }
}

impl Default for SuiteRunner {
    fn default() -> Self {
        Self::new(Classifier::default(), ArtifactStore::default())
    }
}

#[cfg(all(test, unix))]
pub(crate) mod test_support {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::{Path, PathBuf};

    /// Write an executable shell script that prints `stdout` and exits with `code`
    pub fn write_suite(dir: &Path, file_name: &str, stdout: &str, code: i32) -> PathBuf {
        let path = dir.join(file_name);
        let script = format!("#!/bin/sh\nprintf '%s' '{}'\nexit {}\n", stdout, code);
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::test_support::write_suite;
    use super::*;
    use crate::classifier::{ReportLayout, REPORT_DELIMITER};
    use std::fs;
    use tempfile::tempdir;

    const REPORT: &str = "-----------------------\nT1:PASS\nT2:FAIL\n-----------------------\n";

    #[tokio::test]
    async fn test_completed_suite() {
        let dir = tempdir().unwrap();
        let exe = write_suite(dir.path(), "test_led.out", REPORT, 1);

        let run = SuiteRunner::default().run(&exe).await;

        assert_eq!(run.name, "test_led");
        assert_eq!(run.exit_code, Some(1));
        let report = run.report().unwrap();
        assert_eq!(report.passed, vec!["T1:PASS"]);
        assert_eq!(report.failed, vec!["T2:FAIL"]);
        assert!(run.notices.is_empty());
    }

    #[tokio::test]
    async fn test_artifact_matches_stdout() {
        let dir = tempdir().unwrap();
        let stdout = "boot\n-----------------------\nT1:PASS\n\ntrailer without newline";
        let exe = write_suite(dir.path(), "test_spi.out", stdout, 0);

        SuiteRunner::default().run(&exe).await;

        let artifact = fs::read(dir.path().join("test_spi.test")).unwrap();
        assert_eq!(artifact, stdout.as_bytes());
    }

    #[tokio::test]
    async fn test_missing_delimiter_is_crash() {
        let dir = tempdir().unwrap();
        let exe = write_suite(dir.path(), "test_dma.out", "T1:PASS\n", 0);

        let run = SuiteRunner::default().run(&exe).await;

        assert!(run.is_crashed());
        assert_eq!(run.exit_code, Some(0));
        assert!(matches!(run.notices[0], Notice::SuiteCrashed { .. }));
        assert!(!dir.path().join("test_dma.test").exists());
    }

    #[tokio::test]
    async fn test_count_mismatch() {
        let dir = tempdir().unwrap();
        let exe = write_suite(dir.path(), "test_gpio.out", REPORT, 2);

        let run = SuiteRunner::default().run(&exe).await;

        assert_eq!(run.report().unwrap().failed.len(), 1);
        assert_eq!(
            run.notices,
            vec![Notice::CountMismatch {
                suite: "test_gpio".to_string(),
                reported: Some(2),
                tracked: 1,
            }]
        );
    }

    #[tokio::test]
    async fn test_spawn_failure_is_crash() {
        let dir = tempdir().unwrap();
        let run = SuiteRunner::default()
            .run(&dir.path().join("does_not_exist.out"))
            .await;

        assert!(run.is_crashed());
        assert_eq!(run.exit_code, None);
        assert_eq!(run.name, "does_not_exist");
    }

    #[tokio::test]
    async fn test_info_and_unparseable_kept_on_run() {
        let dir = tempdir().unwrap();
        let stdout = "-----------------------\nT0:INFO: seed 42\ngarbage line\nT1:PASS\n";
        let exe = write_suite(dir.path(), "test_rng.out", stdout, 0);

        let run = SuiteRunner::default().run(&exe).await;

        assert_eq!(
            run.notices,
            vec![
                Notice::Info {
                    line: "T0:INFO: seed 42".to_string()
                },
                Notice::UnparseableLine {
                    line: "garbage line".to_string()
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_indented_delimiter_warns() {
        let dir = tempdir().unwrap();
        let stdout = "  -----------------------\nT1:PASS\n";
        let exe = write_suite(dir.path(), "test_i2c.out", stdout, 0);

        let run = SuiteRunner::default().run(&exe).await;

        assert!(!run.is_crashed());
        assert_eq!(run.report().unwrap().total(), 0);
        assert_eq!(
            run.notices,
            vec![Notice::DelimiterNotOnOwnLine {
                suite: "test_i2c".to_string()
            }]
        );
    }

    #[tokio::test]
    async fn test_leading_layout_runner() {
        let dir = tempdir().unwrap();
        let stdout = "t.c:1:a:PASS\nt.c:2:b:IGNORE\n\n-----------------------\n2 Tests 0 Failures 1 Ignored\nOK\n";
        let exe = write_suite(dir.path(), "test_unity.out", stdout, 0);

        let runner = SuiteRunner::new(
            Classifier::new(REPORT_DELIMITER, ReportLayout::Leading),
            ArtifactStore::new("log"),
        );
        let run = runner.run(&exe).await;

        let report = run.report().unwrap();
        assert_eq!(report.passed, vec!["t.c:1:a:PASS"]);
        assert_eq!(report.ignored, vec!["t.c:2:b:IGNORE"]);
        assert!(run.notices.is_empty());
        assert!(dir.path().join("test_unity.log").exists());
    }
}
