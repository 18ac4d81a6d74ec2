//! Builder for loader configuration.
//!
//! Settings are layered with the following precedence (highest first):
//!
//! 1. Builder calls (`with_profile`, `with_ceiling`, ...)
//! 2. `LOCENV_*` environment variables (unless [`LoaderBuilder::skip_env`])
//! 3. Built-in defaults

use std::path::PathBuf;

use crate::config::environment::EnvironmentConfig;
use crate::config::schema::LoaderConfig;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::loader::FileEnvLoader;

/// Builds a [`FileEnvLoader`] from layered configuration.
///
/// # Examples
///
/// ```
/// use locenv::config::LoaderBuilder;
/// use locenv::EnvLoader;
///
/// let loader = LoaderBuilder::new()
///     .skip_env()
///     .with_profile("test")
///     .with_start_dir("/srv/app")
///     .build()
///     .unwrap();
///
/// assert_eq!(loader.get_env(), "test");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LoaderBuilder {
    profile: Option<String>,
    profile_var: Option<String>,
    prefix: Option<String>,
    start_dir: Option<PathBuf>,
    ceiling: Option<PathBuf>,
    max_depth: Option<usize>,
    override_existing: Option<bool>,
    skip_env: bool,
}

impl LoaderBuilder {
    /// Create a builder with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit profile instead of reading the profile variable.
    #[must_use]
    pub fn with_profile(mut self, profile: impl Into<String>) -> Self {
        self.profile = Some(profile.into());
        self
    }

    /// Read the profile from a different variable.
    #[must_use]
    pub fn with_profile_var(mut self, var: impl Into<String>) -> Self {
        self.profile_var = Some(var.into());
        self
    }

    /// Use a different candidate file prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    /// Start the upward walk here instead of the current directory.
    #[must_use]
    pub fn with_start_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.start_dir = Some(dir.into());
        self
    }

    /// Never walk above this directory.
    #[must_use]
    pub fn with_ceiling(mut self, dir: impl Into<PathBuf>) -> Self {
        self.ceiling = Some(dir.into());
        self
    }

    /// Limit the depth of each level's recursive scan.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Whether loaded values replace variables that are already set.
    #[must_use]
    pub fn override_existing(mut self, enabled: bool) -> Self {
        self.override_existing = Some(enabled);
        self
    }

    /// Ignore `LOCENV_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Produce the merged, validated configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a `LOCENV_*` variable is malformed or the merged
    /// configuration fails validation.
    pub fn build_config(self) -> Result<LoaderConfig> {
        let mut config = LoaderConfig::default();

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(var) = self.profile_var {
            config.profile_var = var;
        }
        if let Some(prefix) = self.prefix {
            config.prefix = prefix;
        }
        if self.profile.is_some() {
            config.profile = self.profile;
        }
        if self.start_dir.is_some() {
            config.start_dir = self.start_dir;
        }
        if self.ceiling.is_some() {
            config.ceiling = self.ceiling;
        }
        if self.max_depth.is_some() {
            config.max_depth = self.max_depth;
        }
        if let Some(enabled) = self.override_existing {
            config.override_existing = enabled;
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    /// Build the loader. The active profile is resolved here.
    ///
    /// # Errors
    ///
    /// Same as [`LoaderBuilder::build_config`].
    pub fn build(self) -> Result<FileEnvLoader> {
        Ok(FileEnvLoader::with_config(self.build_config()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EnvLoader;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_builder_defaults() {
        let config = LoaderBuilder::new().skip_env().build_config().unwrap();
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    fn test_builder_overrides() {
        let config = LoaderBuilder::new()
            .skip_env()
            .with_profile("qa")
            .with_profile_var("RUST_ENV")
            .with_prefix("settings.")
            .with_start_dir("/srv/app/api")
            .with_ceiling("/srv/app")
            .with_max_depth(3)
            .override_existing(true)
            .build_config()
            .unwrap();

        assert_eq!(config.profile.as_deref(), Some("qa"));
        assert_eq!(config.profile_var, "RUST_ENV");
        assert_eq!(config.prefix, "settings.");
        assert_eq!(config.start_dir, Some(PathBuf::from("/srv/app/api")));
        assert_eq!(config.ceiling, Some(PathBuf::from("/srv/app")));
        assert_eq!(config.max_depth, Some(3));
        assert!(config.override_existing);
    }

    #[test]
    fn test_builder_validates() {
        let result = LoaderBuilder::new().skip_env().with_max_depth(0).build();
        assert!(result.is_err());

        let result = LoaderBuilder::new().skip_env().with_prefix("a/b").build();
        assert!(result.is_err());
    }

    #[test]
    #[serial]
    fn test_builder_overrides_environment() {
        env::set_var("LOCENV_PREFIX", "from-env.");
        env::set_var("LOCENV_MAX_DEPTH", "2");

        let result = LoaderBuilder::new().with_max_depth(5).build_config();
        env::remove_var("LOCENV_PREFIX");
        env::remove_var("LOCENV_MAX_DEPTH");

        let config = result.unwrap();
        assert_eq!(config.prefix, "from-env.");
        assert_eq!(config.max_depth, Some(5));
    }

    #[test]
    #[serial]
    fn test_skip_env_ignores_environment() {
        env::set_var("LOCENV_PREFIX", "from-env.");
        let result = LoaderBuilder::new().skip_env().build_config();
        env::remove_var("LOCENV_PREFIX");

        assert_eq!(result.unwrap().prefix, ".env.");
    }

    #[test]
    #[serial]
    fn test_build_resolves_profile_from_custom_var() {
        env::set_var("LOCENV_BUILDER_TEST_PROFILE", "integration");
        let result = LoaderBuilder::new()
            .skip_env()
            .with_profile_var("LOCENV_BUILDER_TEST_PROFILE")
            .build();
        env::remove_var("LOCENV_BUILDER_TEST_PROFILE");

        assert_eq!(result.unwrap().get_env(), "integration");
    }
}
