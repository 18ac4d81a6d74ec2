//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directory trees
//! - Command builder helpers that keep the search inside the tree

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Variables that would leak configuration from the developer's shell.
const AMBIENT_VARS: [&str; 8] = [
    "APP_ENV",
    "LOCENV_PROFILE",
    "LOCENV_PROFILE_VAR",
    "LOCENV_PREFIX",
    "LOCENV_CEILING",
    "LOCENV_MAX_DEPTH",
    "LOCENV_OVERRIDE",
    "LOCENV_LOG_MODE",
];

/// Test environment with an isolated directory tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new, empty test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();

        Self {
            temp_dir,
            temp_path,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// Ambient `APP_ENV` and `LOCENV_*` variables are still cleared.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("locenv").expect("Failed to find locenv binary");
        for var in AMBIENT_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// Get a command builder whose search is bounded by this environment.
    ///
    /// The returned command has `--ceiling` set to the temporary directory,
    /// so nothing outside the test tree is scanned.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--ceiling").arg(&self.temp_path);
        cmd
    }

    /// Command bounded by this environment that starts searching at `dir`
    /// with the given profile.
    pub fn command_for(&self, dir: &Path, profile: &str) -> Command {
        let mut cmd = self.command();
        cmd.arg("--dir").arg(dir).arg("--profile").arg(profile);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a subdirectory in the test environment.
    pub fn create_dir(&self, name: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Write a file relative to the test environment, creating parents.
    pub fn write_file(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&path, contents).expect("Failed to write test file");
        path
    }
}
