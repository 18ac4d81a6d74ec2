//! Environment variable handling for configuration overrides.
//!
//! This module provides support for LOCENV_* environment variables that
//! override the built-in loader defaults.

use crate::config::schema::LoaderConfig;
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use locenv::config::{EnvironmentConfig, LoaderConfig};
///
/// let mut config = LoaderConfig::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Reads `LOCENV_PROFILE_VAR`, `LOCENV_PREFIX`, `LOCENV_CEILING`,
    /// `LOCENV_MAX_DEPTH` and `LOCENV_OVERRIDE`.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, invalid boolean).
    pub fn apply_overrides(config: &mut LoaderConfig) -> Result<()> {
        // LOCENV_PROFILE_VAR
        if let Ok(var) = env::var("LOCENV_PROFILE_VAR") {
            config.profile_var = var;
        }

        // LOCENV_PREFIX
        if let Ok(prefix) = env::var("LOCENV_PREFIX") {
            config.prefix = prefix;
        }

        // LOCENV_CEILING
        if let Some(ceiling) = env::var_os("LOCENV_CEILING") {
            if !ceiling.is_empty() {
                config.ceiling = Some(PathBuf::from(ceiling));
            }
        }

        // LOCENV_MAX_DEPTH
        if let Ok(depth) = env::var("LOCENV_MAX_DEPTH") {
            config.max_depth = Some(Self::parse_depth("LOCENV_MAX_DEPTH", &depth)?);
        }

        // LOCENV_OVERRIDE
        if let Ok(val) = env::var("LOCENV_OVERRIDE") {
            config.override_existing = Self::parse_bool("LOCENV_OVERRIDE", &val)?;
        }

        Ok(())
    }

    /// Parse a depth limit. Must be a positive integer.
    fn parse_depth(field: &str, s: &str) -> Result<usize> {
        match s.trim().parse::<usize>() {
            Ok(depth) if depth > 0 => Ok(depth),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!("Invalid depth '{s}': must be a positive integer"),
            }),
        }
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const KEYS: [&str; 5] = [
        "LOCENV_PROFILE_VAR",
        "LOCENV_PREFIX",
        "LOCENV_CEILING",
        "LOCENV_MAX_DEPTH",
        "LOCENV_OVERRIDE",
    ];

    fn clear_locenv_vars() {
        for key in KEYS {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_bool_true_variants() {
        assert!(EnvironmentConfig::parse_bool("test", "true").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "TRUE").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "1").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "yes").unwrap());
        assert!(EnvironmentConfig::parse_bool("test", "On").unwrap());
    }

    #[test]
    fn test_parse_bool_false_variants() {
        assert!(!EnvironmentConfig::parse_bool("test", "false").unwrap());
        assert!(!EnvironmentConfig::parse_bool("test", "0").unwrap());
        assert!(!EnvironmentConfig::parse_bool("test", "NO").unwrap());
        assert!(!EnvironmentConfig::parse_bool("test", "off").unwrap());
    }

    #[test]
    fn test_parse_bool_invalid() {
        let err = EnvironmentConfig::parse_bool("LOCENV_OVERRIDE", "maybe").unwrap_err();
        assert!(err.to_string().contains("LOCENV_OVERRIDE"));
    }

    #[test]
    fn test_parse_depth() {
        assert_eq!(EnvironmentConfig::parse_depth("d", "3").unwrap(), 3);
        assert_eq!(EnvironmentConfig::parse_depth("d", " 12 ").unwrap(), 12);
        assert!(EnvironmentConfig::parse_depth("d", "0").is_err());
        assert!(EnvironmentConfig::parse_depth("d", "-1").is_err());
        assert!(EnvironmentConfig::parse_depth("d", "deep").is_err());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_no_env_vars() {
        clear_locenv_vars();
        let mut config = LoaderConfig::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, LoaderConfig::default());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_all_vars() {
        clear_locenv_vars();
        env::set_var("LOCENV_PROFILE_VAR", "RUST_ENV");
        env::set_var("LOCENV_PREFIX", "settings.");
        env::set_var("LOCENV_CEILING", "/srv");
        env::set_var("LOCENV_MAX_DEPTH", "4");
        env::set_var("LOCENV_OVERRIDE", "yes");

        let mut config = LoaderConfig::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_locenv_vars();
        result.unwrap();

        assert_eq!(config.profile_var, "RUST_ENV");
        assert_eq!(config.prefix, "settings.");
        assert_eq!(config.ceiling, Some(PathBuf::from("/srv")));
        assert_eq!(config.max_depth, Some(4));
        assert!(config.override_existing);
    }

    #[test]
    #[serial]
    fn test_apply_overrides_empty_ceiling_ignored() {
        clear_locenv_vars();
        env::set_var("LOCENV_CEILING", "");

        let mut config = LoaderConfig::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_locenv_vars();
        result.unwrap();

        assert!(config.ceiling.is_none());
    }

    #[test]
    #[serial]
    fn test_apply_overrides_invalid_depth() {
        clear_locenv_vars();
        env::set_var("LOCENV_MAX_DEPTH", "lots");

        let mut config = LoaderConfig::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_locenv_vars();

        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
