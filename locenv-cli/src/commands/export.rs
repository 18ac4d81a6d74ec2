//! Export command implementation.
//!
//! This module implements the `export` command, which prints the variables
//! from the matched environment file in a chosen format. With the default
//! format the output can be evaluated by a shell:
//!
//! ```text
//! eval "$(locenv export)"
//! ```

use crate::error::CliError;
use crate::utils::{build_loader, GlobalOptions};
use clap::{Args, ValueEnum};
use locenv::output::{OutputFormat, ShellType};

/// Print the variables from the matched environment file.
#[derive(Args)]
pub struct ExportCommand {
    /// Output format
    #[arg(long, value_enum, default_value = "export", ignore_case = true)]
    pub format: OutputFormatArg,

    /// Shell type for export format (auto-detect if not specified)
    #[arg(long)]
    pub shell: Option<String>,
}

/// Output format argument for clap.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormatArg {
    /// Shell-specific export statements
    Export,
    /// Dotenv (.env file) format
    Dotenv,
    /// JSON format
    Json,
    /// YAML format
    Yaml,
    /// Human-readable format
    Human,
}

impl OutputFormatArg {
    /// Convert to `OutputFormat`, detecting shell type if needed.
    pub fn to_output_format(self, shell_arg: Option<&str>) -> Result<OutputFormat, CliError> {
        match self {
            Self::Export => {
                let shell = match shell_arg {
                    Some(shell_str) => ShellType::from_string(shell_str)
                        .map_err(|e| CliError::InvalidArguments(e.to_string()))?,
                    None => ShellType::detect(),
                };
                Ok(OutputFormat::Export(shell))
            }
            Self::Dotenv => Ok(OutputFormat::Dotenv),
            Self::Json => Ok(OutputFormat::Json),
            Self::Yaml => Ok(OutputFormat::Yaml),
            Self::Human => Ok(OutputFormat::Human),
        }
    }
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // Resolve the format first so a bad --shell fails before any search
        let format = self.format.to_output_format(self.shell.as_deref())?;

        let mut loader = build_loader(global)?;
        let loaded = loader.resolve()?;
        log::info!(
            "{} environment read from {}",
            loaded.profile(),
            loaded.path().display()
        );

        let output = format.create_formatter().format(loaded.vars())?;
        if !output.is_empty() {
            println!("{output}");
        }

        Ok(())
    }
}
