#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # locenv
//!
//! A library for locating and loading profile-specific `.env` files.
//!
//! The active profile comes from a process variable (`APP_ENV` by default).
//! Starting at the current directory, the loader walks upward through the
//! parent directories, recursively scanning each one for
//! `.env.<profile>`, and loads the first match into the process
//! environment.
//!
//! ## Core Types
//!
//! - [`FileEnvLoader`] and [`EnvLoader`]: profile resolution and loading
//! - [`LoadedEnv`]: parsed pairs, applied explicitly
//! - [`Locator`] and [`Candidate`]: the upward directory search
//! - [`LoaderConfig`] and [`LoaderBuilder`]: configuration
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```no_run
//! use locenv::{EnvLoader, FileEnvLoader};
//!
//! let mut loader = FileEnvLoader::new();
//! loader.load_env().unwrap();
//! assert_eq!(loader.get_env(), std::env::var("APP_ENV").unwrap());
//! ```

pub mod config;
pub mod error;
pub mod loader;
pub mod locate;
pub mod logging;
pub mod output;
pub mod profile;

// Re-export key types at crate root for convenience
pub use config::{LoaderBuilder, LoaderConfig};
pub use error::{Error, Result};
pub use loader::{EnvLoader, FileEnvLoader, LoadState, LoadedEnv};
pub use locate::{Candidate, Locator};
pub use logging::{init_logger, resolve_log_level, LogLevel, Logger};
pub use profile::{resolve_profile, DEFAULT_PROFILE_VAR};
