//! Common test utilities for CLI integration tests.

use assert_cmd::Command;
use std::path::PathBuf;
use tempfile::TempDir;

/// Test environment with a scratch directory for input and config files.
pub struct TestEnv {
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        Self {
            temp_dir,
            temp_path,
        }
    }

    /// A command for the pathsight binary, isolated from the caller's
    /// flavour setting.
    pub fn command(&self) -> Command {
        let mut cmd = Command::cargo_bin("pathsight").expect("Failed to find pathsight binary");
        cmd.env_remove("PATHSIGHT_FLAVOUR");
        cmd.env_remove("PATHSIGHT_LOG_MODE");
        cmd
    }

    /// Write `contents` to `name` inside the environment.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}

/// Paths used throughout the tagger tests, in Windows form.
#[allow(dead_code)]
pub const ARMEL: &[&str] = &[
    "D:/data/armel/README",
    "D:/data/armel/file1.zip",
    "D:/data/armel/file2.gz",
    "D:/data/armel/file3.tar",
    "D:/data/armel/file4.bz2",
];
