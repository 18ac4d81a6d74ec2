//! Main entry point for the locenv CLI.
//!
//! This is the command-line interface for locating and loading
//! profile-specific `.env` files. It provides the commands:
//! - `locate`: Show which environment file would be loaded
//! - `export`: Print the variables from the matched file
//! - `exec`: Run a program with the matched file loaded
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _level = locenv::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        profile: cli.profile,
        profile_var: cli.profile_var,
        dir: cli.dir,
        ceiling: cli.ceiling,
        max_depth: cli.max_depth,
        override_existing: cli.override_existing,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Locate(cmd) => cmd.execute(&global),
        cli::Command::Export(cmd) => cmd.execute(&global),
        cli::Command::Exec(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if e.is_reportable() {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
