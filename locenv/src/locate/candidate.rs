//! Candidate environment files.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Prefix that marks a file as a candidate environment file.
pub const DEFAULT_PREFIX: &str = ".env.";

/// A file whose name carries the candidate prefix.
///
/// # Examples
///
/// ```
/// use locenv::locate::Candidate;
/// use std::path::Path;
///
/// let candidate = Candidate::from_path(Path::new("/srv/app/.env.production"), ".env.").unwrap();
/// assert_eq!(candidate.profile, "production");
/// assert!(candidate.matches("production"));
/// assert!(!candidate.matches("Production"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    /// Location of the file.
    pub path: PathBuf,
    /// Profile encoded in the file name (everything after the prefix).
    pub profile: String,
}

impl Candidate {
    /// Build a candidate from a path if its file name starts with `prefix`.
    ///
    /// Returns `None` for paths without a file name, for names that are not
    /// valid UTF-8, and for names without the prefix.
    #[must_use]
    pub fn from_path(path: &Path, prefix: &str) -> Option<Self> {
        let name = path.file_name()?.to_str()?;
        let profile = candidate_profile(name, prefix)?;
        Some(Self {
            path: path.to_path_buf(),
            profile: profile.to_string(),
        })
    }

    /// Whether this candidate encodes exactly `profile` (case-sensitive).
    #[must_use]
    pub fn matches(&self, profile: &str) -> bool {
        self.profile == profile
    }
}

/// Extract the profile encoded in a candidate file name.
///
/// # Examples
///
/// ```
/// use locenv::locate::candidate_profile;
///
/// assert_eq!(candidate_profile(".env.test", ".env."), Some("test"));
/// assert_eq!(candidate_profile(".env.", ".env."), Some(""));
/// assert_eq!(candidate_profile(".env", ".env."), None);
/// assert_eq!(candidate_profile("app.env.test", ".env."), None);
/// ```
#[must_use]
pub fn candidate_profile<'a>(file_name: &'a str, prefix: &str) -> Option<&'a str> {
    file_name.strip_prefix(prefix)
}
