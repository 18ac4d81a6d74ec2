//! Active profile resolution.
//!
//! The active profile names the runtime context ("test", "production", ...)
//! whose `.env.<profile>` file should be loaded.

use std::env;

/// Variable read for the active profile when nothing else is configured.
pub const DEFAULT_PROFILE_VAR: &str = "APP_ENV";

/// Read the active profile from the process environment.
///
/// Returns the value of `var` verbatim, or an empty string when the
/// variable is unset or not valid Unicode.
///
/// # Examples
///
/// ```
/// use locenv::profile::resolve_profile;
///
/// assert_eq!(resolve_profile("LOCENV_DOCTEST_UNSET_PROFILE"), "");
/// ```
#[must_use]
pub fn resolve_profile(var: &str) -> String {
    env::var(var).unwrap_or_default()
}
