//! Exec command implementation.
//!
//! This module implements the `exec` command, which runs a program with the
//! matched environment file applied to the child's environment only.

use crate::error::CliError;
use crate::utils::{build_loader, GlobalOptions};
use clap::Args;
use std::process::{Command, ExitStatus};

/// Run a program with the matched environment file loaded.
#[derive(Args)]
pub struct ExecCommand {
    /// Program to run, followed by its arguments
    #[arg(
        required = true,
        trailing_var_arg = true,
        allow_hyphen_values = true,
        value_name = "COMMAND"
    )]
    pub command: Vec<String>,
}

impl ExecCommand {
    /// Execute the exec command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let Some((program, args)) = self.command.split_first() else {
            return Err(CliError::InvalidArguments(
                "no program given to exec".to_string(),
            ));
        };

        let mut loader = build_loader(global)?;
        let loaded = loader.resolve()?;
        let override_existing = loader.config().override_existing;

        let vars = loaded.effective_vars(override_existing);
        log::info!(
            "{} environment loaded from {}",
            loaded.profile(),
            loaded.path().display()
        );
        log::debug!("running {program} with {} variables", vars.len());

        let status = Command::new(program)
            .args(args)
            .envs(vars)
            .status()
            .map_err(|e| {
                CliError::Io(std::io::Error::new(
                    e.kind(),
                    format!("failed to run {program}: {e}"),
                ))
            })?;

        match exit_code(status) {
            0 => Ok(()),
            code => Err(CliError::ChildExited(code)),
        }
    }
}

/// Exit code to report for a finished child.
///
/// A child killed by a signal reports `128 + signal`, as shells do.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    1
}
