//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{CompletionsCommand, ExecCommand, ExportCommand, LocateCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Locate and load profile-specific `.env` files.
#[derive(Parser)]
#[command(name = "locenv")]
#[command(version, about = "Locate and load profile-specific .env files", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Profile to load (defaults to the value of the profile variable)
    #[arg(long, value_name = "NAME", global = true, env = "LOCENV_PROFILE")]
    pub profile: Option<String>,

    /// Variable that names the active profile
    #[arg(long, value_name = "VAR", global = true)]
    pub profile_var: Option<String>,

    /// Directory to start searching from (defaults to the current directory)
    #[arg(long, value_name = "PATH", global = true)]
    pub dir: Option<PathBuf>,

    /// Last directory the upward search may scan
    #[arg(long, value_name = "PATH", global = true)]
    pub ceiling: Option<PathBuf>,

    /// Depth limit for the scan at each level
    #[arg(long, value_name = "DEPTH", global = true)]
    pub max_depth: Option<usize>,

    /// Replace variables that are already set
    #[arg(long = "override", global = true)]
    pub override_existing: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show which environment file would be loaded
    Locate(LocateCommand),

    /// Print the variables from the matched environment file
    Export(ExportCommand),

    /// Run a program with the matched environment file loaded
    Exec(ExecCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
