//! Output formatter implementations.

use std::collections::BTreeMap;

use crate::{Error, Result};

use super::shell::is_shell_safe;
use super::{OutputFormatter, ShellType};

/// Validates that a string is a valid environment variable name.
///
/// Valid names must:
/// - Start with a letter or underscore
/// - Contain only letters, digits, and underscores
fn is_valid_env_var_name(name: &str) -> bool {
    let mut chars = name.chars();
    let Some(first) = chars.next() else {
        return false;
    };

    // First character must be letter or underscore
    if !first.is_ascii_alphabetic() && first != '_' {
        return false;
    }

    // Remaining characters must be alphanumeric or underscore
    chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Collapse pairs into a sorted map; later assignments win.
fn to_map(vars: &[(String, String)]) -> BTreeMap<&str, &str> {
    vars.iter().map(|(k, v)| (k.as_str(), v.as_str())).collect()
}

/// Formatter for shell-specific export statements.
pub struct ExportFormatter {
    shell: ShellType,
}

impl ExportFormatter {
    /// Create a new export formatter for the given shell.
    #[must_use]
    pub fn new(shell: ShellType) -> Self {
        Self { shell }
    }
}

impl OutputFormatter for ExportFormatter {
    fn format(&self, vars: &[(String, String)]) -> Result<String> {
        let mut exports = Vec::with_capacity(vars.len());

        // File order is kept so repeated keys resolve the same way when eval'd
        for (key, value) in vars {
            if !is_valid_env_var_name(key) {
                return Err(Error::Validation {
                    field: "environment_variable".to_string(),
                    message: format!(
                        "invalid environment variable name '{key}': must contain only alphanumeric characters and underscores, and start with a letter or underscore"
                    ),
                });
            }
            exports.push(self.shell.format_export(key, value));
        }

        Ok(exports.join("\n"))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter;

impl OutputFormatter for JsonFormatter {
    fn format(&self, vars: &[(String, String)]) -> Result<String> {
        serde_json::to_string_pretty(&to_map(vars)).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}

/// Formatter for YAML output.
pub struct YamlFormatter;

impl OutputFormatter for YamlFormatter {
    fn format(&self, vars: &[(String, String)]) -> Result<String> {
        if vars.is_empty() {
            return Ok("{}".to_string());
        }

        let yaml = serde_yaml::to_string(&to_map(vars)).map_err(|e| Error::Validation {
            field: "yaml_output".to_string(),
            message: format!("failed to serialize to YAML: {e}"),
        })?;
        Ok(yaml.trim_end().to_string())
    }
}

/// Formatter for dotenv (.env file) format.
pub struct DotenvFormatter;

impl DotenvFormatter {
    fn quote(value: &str) -> String {
        if is_shell_safe(value) {
            return value.to_string();
        }

        let mut quoted = String::with_capacity(value.len() + 2);
        quoted.push('"');
        for c in value.chars() {
            match c {
                '\\' => quoted.push_str(r"\\"),
                '"' => quoted.push_str("\\\""),
                '$' => quoted.push_str(r"\$"),
                '\n' => quoted.push_str(r"\n"),
                _ => quoted.push(c),
            }
        }
        quoted.push('"');
        quoted
    }
}

impl OutputFormatter for DotenvFormatter {
    fn format(&self, vars: &[(String, String)]) -> Result<String> {
        let lines: Vec<String> = vars
            .iter()
            .map(|(key, value)| format!("{key}={}", Self::quote(value)))
            .collect();

        Ok(lines.join("\n"))
    }
}

/// Formatter for human-readable output.
pub struct HumanFormatter;

impl OutputFormatter for HumanFormatter {
    fn format(&self, vars: &[(String, String)]) -> Result<String> {
        if vars.is_empty() {
            return Ok("No variables loaded.".to_string());
        }

        let map = to_map(vars);
        let width = map.keys().map(|k| k.len()).max().unwrap_or(0);

        let mut lines = vec!["Loaded variables:".to_string()];
        for (key, value) in map {
            lines.push(format!("  {key:<width$}  {value}"));
        }

        Ok(lines.join("\n"))
    }
}
