//! Configuration validation.

use std::path::{is_separator, Path};

use crate::config::schema::LoaderConfig;
use crate::error::{Error, Result};

/// Validates loader configuration before a search runs.
///
/// # Examples
///
/// ```
/// use locenv::config::{ConfigValidator, LoaderConfig};
///
/// ConfigValidator::validate(&LoaderConfig::default()).unwrap();
///
/// let bad = LoaderConfig {
///     prefix: String::new(),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns a validation error for an empty or path-like prefix, an empty
    /// profile variable name, a zero depth limit, or empty directories.
    pub fn validate(config: &LoaderConfig) -> Result<()> {
        Self::validate_prefix(&config.prefix)?;
        Self::validate_profile_var(&config.profile_var)?;

        if config.max_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_depth".into(),
                message: "must be at least 1".into(),
            });
        }

        if let Some(ref dir) = config.start_dir {
            Self::validate_dir("start_dir", dir)?;
        }
        if let Some(ref dir) = config.ceiling {
            Self::validate_dir("ceiling", dir)?;
        }

        Ok(())
    }

    fn validate_prefix(prefix: &str) -> Result<()> {
        if prefix.is_empty() {
            return Err(Error::Validation {
                field: "prefix".into(),
                message: "cannot be empty".into(),
            });
        }
        if prefix.chars().any(is_separator) {
            return Err(Error::Validation {
                field: "prefix".into(),
                message: format!("'{prefix}' cannot contain a path separator"),
            });
        }
        Ok(())
    }

    fn validate_profile_var(var: &str) -> Result<()> {
        if var.is_empty() {
            return Err(Error::Validation {
                field: "profile_var".into(),
                message: "cannot be empty".into(),
            });
        }
        if var.contains('=') || var.contains('\0') {
            return Err(Error::Validation {
                field: "profile_var".into(),
                message: format!("'{var}' is not a usable variable name"),
            });
        }
        Ok(())
    }

    fn validate_dir(field: &str, dir: &Path) -> Result<()> {
        if dir.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "cannot be empty".into(),
            });
        }
        Ok(())
    }
}
