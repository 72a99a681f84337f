//! Runs an install plan's shell commands.

use crate::error::{PrereqError, Result};
use crate::shell::{CommandResult, CommandRunner};
use crate::ui::SpinnerHandle;

/// Spinner text once every command has exited zero.
pub const SUCCESS_MESSAGE: &str = "You're good to go";
/// Spinner text when any command fails.
pub const FAILURE_MESSAGE: &str = "Something went wrong";

/// Run `commands` in order, attached to the terminal, and report the outcome
/// on `spinner`.
///
/// Each command runs with the spinner suspended, so its output and any
/// password prompt it shows are left alone.
///
/// Stops at the first command that does not exit zero. Nothing already done
/// is undone.
pub fn run_install(
    runner: &dyn CommandRunner,
    spinner: &mut dyn SpinnerHandle,
    commands: &[&str],
) -> Result<()> {
    match run_all(runner, spinner, commands) {
        Ok(()) => {
            spinner.finish_success(SUCCESS_MESSAGE);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Install failed: {}", e);
            spinner.finish_error(FAILURE_MESSAGE);
            Err(e)
        }
    }
}

fn run_all(
    runner: &dyn CommandRunner,
    spinner: &mut dyn SpinnerHandle,
    commands: &[&str],
) -> Result<()> {
    for command in commands {
        tracing::info!("Running `{}`", command);
        let result = run_suspended(runner, spinner, command)?;
        if !result.success {
            return Err(PrereqError::CommandFailed {
                command: command.to_string(),
                code: result.exit_code,
            });
        }
        tracing::debug!("`{}` finished in {:?}", command, result.duration);
    }
    Ok(())
}

fn run_suspended(
    runner: &dyn CommandRunner,
    spinner: &mut dyn SpinnerHandle,
    command: &str,
) -> Result<CommandResult> {
    let mut result = None;
    spinner.suspend(&mut || result = Some(runner.run_interactive(command)));
    result.unwrap_or_else(|| {
        Err(PrereqError::Other(anyhow::anyhow!(
            "`{}` was never started",
            command
        )))
    })
}
