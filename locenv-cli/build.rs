//! Build script for locenv-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("locenv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Locate and load profile-specific .env files")
        .long_about(
            "Finds the .env.<profile> file for the active profile by searching the \
             current directory, its subdirectories and then each parent directory, \
             and loads it",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("profile")
                .long("profile")
                .help("Profile to load (defaults to the value of the profile variable)")
                .value_name("NAME")
                .global(true)
                .env("LOCENV_PROFILE"),
        )
        .arg(
            Arg::new("profile-var")
                .long("profile-var")
                .help("Variable that names the active profile")
                .value_name("VAR")
                .global(true),
        )
        .arg(
            Arg::new("dir")
                .long("dir")
                .help("Directory to start searching from (defaults to the current directory)")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("ceiling")
                .long("ceiling")
                .help("Last directory the upward search may scan")
                .value_name("PATH")
                .global(true),
        )
        .arg(
            Arg::new("max-depth")
                .long("max-depth")
                .help("Depth limit for the scan at each level")
                .value_name("DEPTH")
                .global(true),
        )
        .arg(
            Arg::new("override")
                .long("override")
                .help("Replace variables that are already set")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("locate")
                .about("Show which environment file would be loaded")
                .long_about("Print the path of the file the active profile resolves to"),
            Command::new("export")
                .about("Print the variables from the matched environment file")
                .long_about(
                    "Print the variables as shell exports, dotenv, JSON, YAML or human text",
                ),
            Command::new("exec")
                .about("Run a program with the matched environment file loaded")
                .long_about("Run a program with the variables added to its environment and exit with its exit code"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var_os("OUT_DIR").ok_or_else(|| {
        std::io::Error::new(std::io::ErrorKind::NotFound, "OUT_DIR is not set")
    })?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;

    fs::write(man_dir.join("locenv.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
