//! Locate command implementation.
//!
//! This module implements the `locate` command, which reports the
//! environment file the active profile resolves to without loading it.

use crate::error::CliError;
use crate::utils::{build_loader, GlobalOptions};
use clap::{Args, ValueEnum};

/// Show which environment file would be loaded.
#[derive(Args)]
pub struct LocateCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "text", ignore_case = true)]
    pub format: LocateFormat,
}

/// Output format for the locate command.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LocateFormat {
    /// The matched path on a single line
    Text,
    /// JSON object with path and profile
    Json,
    /// YAML mapping with path and profile
    Yaml,
}

impl LocateCommand {
    /// Execute the locate command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let loader = build_loader(global)?;

        let candidate = loader.locate()?;
        log::debug!("profile '{}' matched", candidate.profile);

        match self.format {
            LocateFormat::Text => println!("{}", candidate.path.display()),
            LocateFormat::Json => {
                let json = serde_json::to_string_pretty(&candidate)
                    .map_err(|e| CliError::Config(format!("JSON serialization failed: {e}")))?;
                println!("{json}");
            }
            LocateFormat::Yaml => {
                let yaml = serde_yaml::to_string(&candidate)
                    .map_err(|e| CliError::Config(format!("YAML serialization failed: {e}")))?;
                println!("{}", yaml.trim_end());
            }
        }

        Ok(())
    }
}
