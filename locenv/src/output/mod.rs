//! Output formatting module for loaded environments.
//!
//! This module provides various output formats for displaying loaded
//! variables, including shell-specific export statements, dotenv, JSON,
//! YAML and human-readable output.

mod formatters;
mod shell;

use crate::Result;

pub use formatters::{
    DotenvFormatter, ExportFormatter, HumanFormatter, JsonFormatter, YamlFormatter,
};
pub use shell::ShellType;

/// Trait for formatting loaded variables into different output formats.
pub trait OutputFormatter {
    /// Format the given variables into a string.
    ///
    /// # Arguments
    ///
    /// * `vars` - Key/value pairs in file order
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., invalid environment variable names).
    fn format(&self, vars: &[(String, String)]) -> Result<String>;
}

/// Available output formats for loaded variables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Shell-specific export statements.
    Export(ShellType),
    /// Dotenv (.env file) format.
    Dotenv,
    /// JSON format.
    Json,
    /// YAML format.
    Yaml,
    /// Human-readable format.
    Human,
}

impl OutputFormat {
    /// Create a formatter for this output format.
    ///
    /// # Examples
    ///
    /// ```
    /// use locenv::output::{OutputFormat, ShellType};
    ///
    /// let vars = vec![("PORT".to_string(), "8080".to_string())];
    /// let formatter = OutputFormat::Export(ShellType::Bash).create_formatter();
    /// assert_eq!(formatter.format(&vars).unwrap(), "export PORT=8080");
    /// ```
    #[must_use]
    pub fn create_formatter(&self) -> Box<dyn OutputFormatter> {
        match self {
            Self::Export(shell) => Box::new(ExportFormatter::new(*shell)),
            Self::Dotenv => Box::new(DotenvFormatter),
            Self::Json => Box::new(JsonFormatter),
            Self::Yaml => Box::new(YamlFormatter),
            Self::Human => Box::new(HumanFormatter),
        }
    }
}
