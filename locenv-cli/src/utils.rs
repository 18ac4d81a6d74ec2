//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by every command and
//! turns them into a configured loader.

use crate::error::CliError;
use locenv::{FileEnvLoader, LoaderBuilder};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
#[allow(dead_code)] // verbose/quiet are consumed by the logger in main.rs
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit profile, bypassing the profile variable.
    pub profile: Option<String>,

    /// Variable that names the active profile.
    pub profile_var: Option<String>,

    /// Directory where the upward walk starts.
    pub dir: Option<PathBuf>,

    /// Last directory the upward walk may scan.
    pub ceiling: Option<PathBuf>,

    /// Depth limit for the scan at each level.
    pub max_depth: Option<usize>,

    /// Replace variables that are already set.
    pub override_existing: bool,
}

/// Build a loader from the global options.
///
/// Configuration is merged from several sources with precedence:
/// 1. Global options (highest priority)
/// 2. `LOCENV_*` environment variables
/// 3. Built-in defaults (lowest priority)
pub fn build_loader(global: &GlobalOptions) -> Result<FileEnvLoader, CliError> {
    let mut builder = LoaderBuilder::new();

    if let Some(ref profile) = global.profile {
        builder = builder.with_profile(profile.as_str());
    }
    if let Some(ref var) = global.profile_var {
        builder = builder.with_profile_var(var.as_str());
    }
    if let Some(ref dir) = global.dir {
        builder = builder.with_start_dir(dir.as_path());
    }
    if let Some(ref ceiling) = global.ceiling {
        builder = builder.with_ceiling(ceiling.as_path());
    }
    if let Some(depth) = global.max_depth {
        builder = builder.with_max_depth(depth);
    }
    if global.override_existing {
        builder = builder.override_existing(true);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}
