//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `locate`: Show which environment file would be loaded
//! - `export`: Print the variables from the matched file
//! - `exec`: Run a program with the matched file loaded
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod exec;
pub mod export;
pub mod locate;

pub use completions::CompletionsCommand;
pub use exec::ExecCommand;
pub use export::ExportCommand;
pub use locate::LocateCommand;
