//! Profile-aware environment loading.
//!
//! [`FileEnvLoader`] ties the pieces together: it resolves the active
//! profile when it is created, locates `.env.<profile>` by walking upward
//! from the start directory, parses the match with `dotenvy` and applies
//! the pairs to the process environment.
//!
//! # Examples
//!
//! ```no_run
//! use locenv::{EnvLoader, FileEnvLoader};
//!
//! let mut loader = FileEnvLoader::new();
//! loader.load_env().unwrap();
//! println!("running with the {} profile", loader.get_env());
//! ```

use std::collections::HashSet;
use std::env;
use std::path::{Path, PathBuf};

use crate::config::{ConfigValidator, LoaderConfig};
use crate::error::{Error, Result};
use crate::locate::Candidate;
use crate::profile::resolve_profile;

/// Loads the environment file for the active profile.
pub trait EnvLoader {
    /// Locate and load the environment file, applying it to the process
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if no file matches, the search fails, or the file
    /// cannot be parsed.
    fn load_env(&mut self) -> Result<()>;

    /// The active profile: the loaded file's profile after a successful
    /// load, the resolved profile before.
    fn get_env(&self) -> &str;
}

/// Whether a loader has completed a load.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Profile known only from configuration or the profile variable.
    Unloaded,
    /// Profile confirmed by a matched and parsed file.
    Loaded,
}

/// The pairs parsed from a matched environment file.
///
/// Nothing is written to the process environment until [`LoadedEnv::apply`]
/// is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedEnv {
    source: Candidate,
    vars: Vec<(String, String)>,
}

impl LoadedEnv {
    /// The file the pairs came from.
    #[must_use]
    pub fn source(&self) -> &Candidate {
        &self.source
    }

    /// Path of the loaded file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.source.path
    }

    /// Profile encoded in the loaded file's name.
    #[must_use]
    pub fn profile(&self) -> &str {
        &self.source.profile
    }

    /// Parsed pairs in file order.
    #[must_use]
    pub fn vars(&self) -> &[(String, String)] {
        &self.vars
    }

    /// Look up a parsed value. The last assignment in the file wins.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars
            .iter()
            .rev()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Number of parsed pairs.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether the file had no assignments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    /// The pairs that applying would actually set.
    ///
    /// A key assigned more than once keeps its last value, matching
    /// [`LoadedEnv::get`]. Without `override_existing`, keys already present
    /// in the process environment are skipped.
    #[must_use]
    pub fn effective_vars(&self, override_existing: bool) -> Vec<(&str, &str)> {
        let mut seen = HashSet::new();
        let mut effective = Vec::new();
        for (key, value) in self.vars.iter().rev() {
            if !seen.insert(key.as_str()) {
                continue;
            }
            if override_existing || env::var_os(key).is_none() {
                effective.push((key.as_str(), value.as_str()));
            }
        }
        effective.reverse();
        effective
    }

    /// Write the pairs into the process environment.
    ///
    /// Returns how many assignments were made.
    pub fn apply(&self, override_existing: bool) -> usize {
        let vars = self.effective_vars(override_existing);
        for (key, value) in &vars {
            env::set_var(key, value);
        }
        vars.len()
    }
}

/// Environment loader backed by `.env.<profile>` files on disk.
#[derive(Debug, Clone)]
pub struct FileEnvLoader {
    config: LoaderConfig,
    active_profile: String,
    state: LoadState,
}

impl Default for FileEnvLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl FileEnvLoader {
    /// Create a loader with default settings, reading the profile from
    /// `APP_ENV`.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(LoaderConfig::default())
    }

    /// Create a loader from explicit configuration.
    ///
    /// The active profile is `config.profile` if set, otherwise the value
    /// of `config.profile_var` (empty when unset).
    #[must_use]
    pub fn with_config(config: LoaderConfig) -> Self {
        let active_profile = config
            .profile
            .clone()
            .unwrap_or_else(|| resolve_profile(&config.profile_var));

        Self {
            config,
            active_profile,
            state: LoadState::Unloaded,
        }
    }

    /// The configuration this loader was built with.
    #[must_use]
    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// Current load state.
    #[must_use]
    pub fn state(&self) -> LoadState {
        self.state
    }

    /// Whether a load has succeeded.
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.state == LoadState::Loaded
    }

    /// Directory where the upward walk starts.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if no start directory is configured and the
    /// current directory cannot be determined.
    pub fn start_dir(&self) -> Result<PathBuf> {
        match self.config.start_dir {
            Some(ref dir) => Ok(dir.clone()),
            None => Ok(env::current_dir()?),
        }
    }

    /// Locate the file for the active profile without loading it.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or the search fails.
    pub fn find(&self) -> Result<Option<Candidate>> {
        self.search().map(|(_, found)| found)
    }

    /// Locate the file for the active profile, failing when nothing matches.
    ///
    /// # Errors
    ///
    /// Same as [`FileEnvLoader::find`], plus [`Error::NotFound`] naming the
    /// profile and the directory the walk started from.
    pub fn locate(&self) -> Result<Candidate> {
        match self.search()? {
            (_, Some(found)) => Ok(found),
            (start, None) => Err(Error::NotFound {
                profile: self.active_profile.clone(),
                start,
            }),
        }
    }

    /// Run the search, returning the start directory alongside the result.
    fn search(&self) -> Result<(PathBuf, Option<Candidate>)> {
        ConfigValidator::validate(&self.config)?;
        let start = self.start_dir()?;
        let found = self
            .config
            .locator()
            .locate(&start, &self.active_profile)?;
        Ok((start, found))
    }

    /// Locate and parse the file for the active profile.
    ///
    /// On a match the active profile becomes the file's encoded profile,
    /// even if parsing then fails. The process environment is left
    /// untouched.
    ///
    /// # Errors
    ///
    /// - [`Error::Search`] if the search fails
    /// - [`Error::NotFound`] if nothing matches
    /// - [`Error::Parse`] if the matched file cannot be read or parsed
    /// - [`Error::Validation`] if the configuration or ceiling is invalid
    pub fn resolve(&mut self) -> Result<LoadedEnv> {
        let found = self.locate()?;

        self.active_profile.clone_from(&found.profile);
        let vars = parse_file(&found.path)?;
        self.state = LoadState::Loaded;

        Ok(LoadedEnv {
            source: found,
            vars,
        })
    }

    /// Resolve and apply the environment file, returning what was loaded.
    ///
    /// # Errors
    ///
    /// Same as [`FileEnvLoader::resolve`]. Failures are also logged.
    pub fn load(&mut self) -> Result<LoadedEnv> {
        let loaded = self.resolve().inspect_err(|e| {
            log::error!("failed to load environment: {e}");
        })?;

        let applied = loaded.apply(self.config.override_existing);
        log::info!(
            "{} environment loaded from {}",
            loaded.profile(),
            loaded.path().display()
        );
        log::debug!("{applied} of {} variables applied", loaded.len());

        Ok(loaded)
    }
}

impl EnvLoader for FileEnvLoader {
    fn load_env(&mut self) -> Result<()> {
        self.load().map(|_| ())
    }

    fn get_env(&self) -> &str {
        &self.active_profile
    }
}

/// Parse a dotenv file into ordered pairs.
fn parse_file(path: &Path) -> Result<Vec<(String, String)>> {
    let to_error = |source: dotenvy::Error| Error::Parse {
        path: path.to_path_buf(),
        source,
    };

    dotenvy::from_path_iter(path)
        .map_err(to_error)?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(to_error)
}
