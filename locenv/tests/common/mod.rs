//! Common test utilities for integration tests.
//!
//! This module provides fixture builders for directory trees containing
//! environment files, and guards for process environment variables.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use locenv::{FileEnvLoader, LoaderBuilder};
use tempfile::TempDir;

/// A temporary directory tree holding environment files.
///
/// Loaders built from a tree use the tree root as their ceiling, so a test
/// never scans anything outside its own temporary directory.
pub struct EnvTree {
    temp_dir: TempDir,
}

#[allow(dead_code)]
impl EnvTree {
    /// Creates an empty tree.
    pub fn new() -> Self {
        Self {
            temp_dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    /// Root of the tree.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Creates a directory (and its parents) relative to the root.
    pub fn dir(&self, relative: &str) -> PathBuf {
        let path = self.root().join(relative);
        fs::create_dir_all(&path).expect("Failed to create test directory");
        path
    }

    /// Writes a file relative to the root, creating parent directories.
    pub fn file(&self, relative: &str, contents: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&path, contents).expect("Failed to write test file");
        path
    }

    /// Builder for a loader starting at `start` with an explicit profile,
    /// bounded to this tree.
    pub fn builder(&self, start: &Path, profile: &str) -> LoaderBuilder {
        LoaderBuilder::new()
            .skip_env()
            .with_profile(profile)
            .with_start_dir(start)
            .with_ceiling(self.root())
    }

    /// Loader starting at `start` with an explicit profile, bounded to this tree.
    pub fn loader(&self, start: &Path, profile: &str) -> FileEnvLoader {
        self.builder(start, profile)
            .build()
            .expect("Failed to build loader")
    }
}

/// RAII guard for setting and restoring environment variables.
///
/// Note: Tests using environment variables should not run in parallel.
/// Use #[serial] attribute or ensure tests clean up properly.
pub struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

#[allow(dead_code)]
impl EnvGuard {
    /// Sets `key` to `value` until the guard is dropped.
    pub fn set(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    /// Removes `key` until the guard is dropped.
    pub fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(val) => env::set_var(&self.key, val),
            None => env::remove_var(&self.key),
        }
    }
}
