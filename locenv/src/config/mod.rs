//! Configuration system for locenv.
//!
//! This module controls how the active profile is resolved and how the
//! environment file search behaves:
//! - [`LoaderConfig`]: the settings themselves
//! - [`EnvironmentConfig`]: `LOCENV_*` environment variable overrides
//! - [`LoaderBuilder`]: programmatic overrides and loader construction
//! - [`ConfigValidator`]: checks run before a search
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `LoaderBuilder`)
//! 2. Environment variables (`LOCENV_*`)
//! 3. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use locenv::config::LoaderBuilder;
//! use locenv::EnvLoader;
//!
//! let mut loader = LoaderBuilder::new()
//!     .with_profile_var("RUST_ENV")
//!     .build()
//!     .unwrap();
//!
//! loader.load_env().unwrap();
//! ```

pub mod builder;
pub mod environment;
pub mod schema;
pub mod validator;

// Re-export key types at module root
pub use builder::LoaderBuilder;
pub use environment::EnvironmentConfig;
pub use schema::LoaderConfig;
pub use validator::ConfigValidator;
