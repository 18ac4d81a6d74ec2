//! Error types for the locenv library.
//!
//! This module provides the error hierarchy for locating and loading
//! environment files, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a locenv error.
///
/// # Examples
///
/// ```
/// use locenv::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("production".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the locenv library.
#[derive(Debug, Error)]
pub enum Error {
    /// No file matching the active profile exists between the start
    /// directory and the search boundary.
    #[error(
        "configuration file not found for profile '{profile}' (searched upward from {})",
        start.display()
    )]
    NotFound {
        /// The profile that was searched for.
        profile: String,
        /// The directory where the upward walk started.
        start: PathBuf,
    },

    /// A filesystem operation failed while scanning for candidate files.
    #[error("failed to search {}: {source}", path.display())]
    Search {
        /// The path that could not be scanned.
        path: PathBuf,
        /// The underlying walk error.
        #[source]
        source: walkdir::Error,
    },

    /// The matched file could not be read or parsed.
    #[error("failed to load environment from {}: {source}", path.display())]
    Parse {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying parser error.
        #[source]
        source: dotenvy::Error,
    },

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Check if error indicates that no matching file was found.
    ///
    /// # Examples
    ///
    /// ```
    /// use locenv::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::NotFound {
    ///     profile: "dev".to_string(),
    ///     start: PathBuf::from("/srv/app"),
    /// };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Check if error is permission-related.
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::Search { source, .. } => source
                .io_error()
                .is_some_and(|e| e.kind() == std::io::ErrorKind::PermissionDenied),
            Self::Io(e) => e.kind() == std::io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }
}
