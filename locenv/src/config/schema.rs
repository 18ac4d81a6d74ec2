//! Configuration schema definitions.
//!
//! This module defines the settings that control profile resolution and
//! the environment file search.

use std::path::PathBuf;

use crate::locate::{Locator, DEFAULT_PREFIX};
use crate::profile::DEFAULT_PROFILE_VAR;

/// Loader configuration.
///
/// # Examples
///
/// ```
/// use locenv::config::LoaderConfig;
///
/// let config = LoaderConfig {
///     profile: Some("test".to_string()),
///     ..Default::default()
/// };
/// assert_eq!(config.profile_var, "APP_ENV");
/// assert_eq!(config.prefix, ".env.");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Variable holding the active profile.
    pub profile_var: String,

    /// Explicit profile. When set, `profile_var` is not consulted.
    pub profile: Option<String>,

    /// File-name prefix that marks candidate files.
    pub prefix: String,

    /// Directory where the upward walk starts (current directory if unset).
    pub start_dir: Option<PathBuf>,

    /// Last directory the upward walk may scan.
    pub ceiling: Option<PathBuf>,

    /// Depth limit for each level's recursive scan.
    pub max_depth: Option<usize>,

    /// Replace variables that are already set in the environment.
    pub override_existing: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            profile_var: DEFAULT_PROFILE_VAR.to_string(),
            profile: None,
            prefix: DEFAULT_PREFIX.to_string(),
            start_dir: None,
            ceiling: None,
            max_depth: None,
            override_existing: false,
        }
    }
}

impl LoaderConfig {
    /// Build the locator described by this configuration.
    #[must_use]
    pub fn locator(&self) -> Locator {
        let mut locator = Locator::new().with_prefix(self.prefix.clone());
        if let Some(ref ceiling) = self.ceiling {
            locator = locator.with_ceiling(ceiling.clone());
        }
        if let Some(depth) = self.max_depth {
            locator = locator.with_max_depth(depth);
        }
        locator
    }
}
