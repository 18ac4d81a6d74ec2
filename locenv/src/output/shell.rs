//! Shell detection and export formatting.

use std::env;

use crate::Result;

/// Supported shell types for export formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellType {
    /// Bourne Again Shell (bash).
    Bash,
    /// Z Shell (zsh).
    Zsh,
    /// Friendly Interactive Shell (fish).
    Fish,
    /// `PowerShell`.
    PowerShell,
}

impl ShellType {
    /// Detect the current shell from environment variables.
    ///
    /// Detection precedence:
    /// 1. `ZSH_VERSION` - indicates zsh
    /// 2. `FISH_VERSION` - indicates fish
    /// 3. `PSModulePath` - indicates `PowerShell`
    /// 4. `SHELL` environment variable (path like `/bin/bash`)
    /// 5. Default to bash if unable to determine
    #[must_use]
    pub fn detect() -> Self {
        if env::var("ZSH_VERSION").is_ok() {
            return Self::Zsh;
        }
        if env::var("FISH_VERSION").is_ok() {
            return Self::Fish;
        }
        if env::var("PSModulePath").is_ok() {
            return Self::PowerShell;
        }

        match env::var("SHELL") {
            Ok(shell_path) if shell_path.contains("zsh") => Self::Zsh,
            Ok(shell_path) if shell_path.contains("fish") => Self::Fish,
            Ok(shell_path) if shell_path.contains("pwsh") || shell_path.contains("powershell") => {
                Self::PowerShell
            }
            _ => Self::Bash,
        }
    }

    /// Parse a shell type from a string.
    ///
    /// # Arguments
    ///
    /// * `s` - Shell name (case-insensitive): "bash", "zsh", "fish", "powershell", "pwsh"
    ///
    /// # Errors
    ///
    /// Returns an error if the shell name is not recognized.
    pub fn from_string(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" | "sh" => Ok(Self::Bash),
            "zsh" => Ok(Self::Zsh),
            "fish" => Ok(Self::Fish),
            "powershell" | "pwsh" | "ps" => Ok(Self::PowerShell),
            _ => Err(crate::Error::Validation {
                field: "shell".to_string(),
                message: format!(
                    "unknown shell type '{s}': supported shells are bash, zsh, fish, powershell"
                ),
            }),
        }
    }

    /// Format an export statement for this shell type.
    ///
    /// Values are quoted when they contain anything beyond a conservative
    /// set of safe characters. `PowerShell` values are always quoted.
    ///
    /// # Examples
    ///
    /// ```
    /// use locenv::output::ShellType;
    ///
    /// assert_eq!(ShellType::Bash.format_export("PORT", "5000"), "export PORT=5000");
    /// assert_eq!(ShellType::Bash.format_export("MSG", "it's"), "export MSG='it'\\''s'");
    /// assert_eq!(ShellType::Fish.format_export("PORT", "5000"), "set -gx PORT 5000");
    /// assert_eq!(ShellType::PowerShell.format_export("PORT", "5000"), "$env:PORT='5000'");
    /// ```
    #[must_use]
    pub fn format_export(&self, var: &str, value: &str) -> String {
        match self {
            Self::Bash | Self::Zsh => format!("export {var}={}", posix_quote(value)),
            Self::Fish => format!("set -gx {var} {}", fish_quote(value)),
            Self::PowerShell => format!("$env:{var}='{}'", value.replace('\'', "''")),
        }
    }
}

/// Whether a value can be emitted without quotes.
pub(crate) fn is_shell_safe(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "_-./:,@%+".contains(c))
}

fn posix_quote(value: &str) -> String {
    if is_shell_safe(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\'', r"'\''"))
    }
}

fn fish_quote(value: &str) -> String {
    if is_shell_safe(value) {
        value.to_string()
    } else {
        format!("'{}'", value.replace('\\', r"\\").replace('\'', r"\'"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_string() {
        assert_eq!(ShellType::from_string("bash").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("BASH").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("sh").unwrap(), ShellType::Bash);
        assert_eq!(ShellType::from_string("zsh").unwrap(), ShellType::Zsh);
        assert_eq!(ShellType::from_string("fish").unwrap(), ShellType::Fish);
        assert_eq!(
            ShellType::from_string("pwsh").unwrap(),
            ShellType::PowerShell
        );
        assert!(ShellType::from_string("unknown").is_err());
    }

    #[test]
    fn test_format_export_posix() {
        assert_eq!(
            ShellType::Bash.format_export("DATABASE_URL", "postgres://db:5432/app"),
            "export DATABASE_URL=postgres://db:5432/app"
        );
        assert_eq!(
            ShellType::Zsh.format_export("GREETING", "hello world"),
            "export GREETING='hello world'"
        );
        assert_eq!(ShellType::Bash.format_export("EMPTY", ""), "export EMPTY=''");
        assert_eq!(
            ShellType::Bash.format_export("SUBST", "$HOME"),
            "export SUBST='$HOME'"
        );
    }

    #[test]
    fn test_format_export_posix_single_quote() {
        assert_eq!(
            ShellType::Bash.format_export("MSG", "don't"),
            "export MSG='don'\\''t'"
        );
    }

    #[test]
    fn test_format_export_fish() {
        assert_eq!(ShellType::Fish.format_export("PORT", "5000"), "set -gx PORT 5000");
        assert_eq!(
            ShellType::Fish.format_export("MSG", r"it's a\b"),
            r"set -gx MSG 'it\'s a\\b'"
        );
    }

    #[test]
    fn test_format_export_powershell() {
        assert_eq!(
            ShellType::PowerShell.format_export("PORT", "5000"),
            "$env:PORT='5000'"
        );
        assert_eq!(
            ShellType::PowerShell.format_export("MSG", "it's"),
            "$env:MSG='it''s'"
        );
    }

    #[test]
    fn test_is_shell_safe() {
        assert!(is_shell_safe("abc-123_/x.y:z"));
        assert!(!is_shell_safe(""));
        assert!(!is_shell_safe("a b"));
        assert!(!is_shell_safe("a;b"));
        assert!(!is_shell_safe("$VAR"));
        assert!(!is_shell_safe("naïve"));
    }

    #[test]
    fn test_detect_returns_a_shell() {
        // Depends on the test environment, so only check it returns something sensible
        let detected = ShellType::detect();
        assert!(matches!(
            detected,
            ShellType::Bash | ShellType::Zsh | ShellType::Fish | ShellType::PowerShell
        ));
    }
}
