//! Environment file discovery.
//!
//! The locator walks upward from a start directory. At every level it
//! recursively scans that directory (and all of its descendants) for a
//! file named `<prefix><profile>`, stopping at the first match.
//!
//! # Search order
//!
//! Within one level, entries are visited depth-first in lexicographic
//! file-name order, so the same tree always yields the same match. Levels
//! are visited from the start directory upward; the walk stops before the
//! filesystem root, when a relative path runs out of components, or after
//! scanning the configured ceiling.
//!
//! # Examples
//!
//! ```no_run
//! use locenv::locate::Locator;
//! use std::path::Path;
//!
//! let locator = Locator::new();
//! if let Some(found) = locator.locate(Path::new("/srv/app/current"), "production").unwrap() {
//!     println!("{} -> {}", found.profile, found.path.display());
//! }
//! ```

mod candidate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};

pub use candidate::{candidate_profile, Candidate, DEFAULT_PREFIX};

/// Locates the environment file for a profile.
#[derive(Debug, Clone)]
pub struct Locator {
    prefix: String,
    ceiling: Option<PathBuf>,
    max_depth: Option<usize>,
}

impl Default for Locator {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            ceiling: None,
            max_depth: None,
        }
    }
}

impl Locator {
    /// Create a locator with the default `.env.` prefix and no limits.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different candidate prefix.
    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    /// Do not walk above `ceiling`. The ceiling itself is still scanned.
    ///
    /// The ceiling must be an existing ancestor of (or equal to) the start
    /// directory. Both are compared after resolving symlinks and `..`.
    #[must_use]
    pub fn with_ceiling(mut self, ceiling: impl Into<PathBuf>) -> Self {
        self.ceiling = Some(ceiling.into());
        self
    }

    /// Limit how deep each level's recursive scan descends.
    ///
    /// A depth of 1 only looks at files directly inside the level directory.
    #[must_use]
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = Some(max_depth);
        self
    }

    /// The candidate prefix in use.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Walk upward from `start` looking for `<prefix><profile>`.
    ///
    /// Returns `Ok(None)` when no level contains a match.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Search`] if a directory cannot be read during the
    /// walk, including when `start` does not exist, and
    /// [`Error::Validation`] if the ceiling does not exist or is not an
    /// ancestor of `start`.
    pub fn locate(&self, start: &Path, profile: &str) -> Result<Option<Candidate>> {
        let ceiling = self.resolve_ceiling(start)?;
        let mut current = start;

        loop {
            if let Some(found) = self.scan_level(current, profile)? {
                return Ok(Some(found));
            }

            if ceiling.as_deref().is_some_and(|c| is_same_dir(current, c)) {
                return Ok(None);
            }

            match next_level(current) {
                Some(parent) => current = parent,
                None => return Ok(None),
            }
        }
    }

    /// Canonical form of the ceiling, checked against `start`.
    ///
    /// A start directory that cannot be resolved is left for the scan to
    /// report as a search error.
    fn resolve_ceiling(&self, start: &Path) -> Result<Option<PathBuf>> {
        let Some(ref ceiling) = self.ceiling else {
            return Ok(None);
        };

        let canonical = fs::canonicalize(ceiling).map_err(|e| Error::Validation {
            field: "ceiling".into(),
            message: format!("cannot resolve {}: {e}", ceiling.display()),
        })?;

        if let Ok(resolved_start) = fs::canonicalize(start) {
            if !resolved_start.starts_with(&canonical) {
                return Err(Error::Validation {
                    field: "ceiling".into(),
                    message: format!(
                        "{} is not an ancestor of {}",
                        ceiling.display(),
                        start.display()
                    ),
                });
            }
        }

        Ok(Some(canonical))
    }

    /// Recursively scan one level for `<prefix><profile>`.
    ///
    /// The scan ends at the first match; the rest of the subtree is not read.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Search`] if any entry below `dir` cannot be read.
    pub fn scan_level(&self, dir: &Path, profile: &str) -> Result<Option<Candidate>> {
        log::debug!("scanning {} for {}{profile}", dir.display(), self.prefix);

        let mut walker = WalkDir::new(dir).sort_by_file_name();
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        for entry in walker {
            let entry = entry.map_err(|source| {
                let path = source
                    .path()
                    .map_or_else(|| dir.to_path_buf(), Path::to_path_buf);
                Error::Search { path, source }
            })?;

            if entry.file_type().is_dir() {
                continue;
            }

            match Candidate::from_path(entry.path(), &self.prefix) {
                Some(candidate) if candidate.matches(profile) => return Ok(Some(candidate)),
                Some(candidate) => {
                    log::debug!(
                        "skipping {} (profile '{}')",
                        candidate.path.display(),
                        candidate.profile
                    );
                }
                None => {}
            }
        }

        Ok(None)
    }
}

/// Whether `dir` resolves to the already canonical directory `canonical`.
fn is_same_dir(dir: &Path, canonical: &Path) -> bool {
    fs::canonicalize(dir).is_ok_and(|resolved| resolved == canonical)
}

/// The next directory the upward walk should scan after `dir`, if any.
///
/// Returns `None` when the parent would be the filesystem root, or when a
/// relative path has no parent left.
pub(crate) fn next_level(dir: &Path) -> Option<&Path> {
    let parent = dir.parent()?;
    if parent.as_os_str().is_empty() || parent.parent().is_none() {
        return None;
    }

    Some(parent)
}
