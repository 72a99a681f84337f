//! Shell command execution.
//!
//! Two execution styles are needed: a quiet probe whose output is
//! discarded and only the exit status matters, and a pass-through run
//! that inherits the terminal so the user sees package-manager output
//! live. Both go through the [`CommandRunner`] trait so callers can be
//! tested with [`MockRunner`](super::MockRunner).

use crate::error::Result;
use std::io;
use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

/// Result of executing a shell command.
#[derive(Debug, Clone)]
pub struct CommandResult {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,

    /// Whether command succeeded (exit code 0).
    pub success: bool,
}

impl CommandResult {
    /// Create a success result.
    pub fn success(duration: Duration) -> Self {
        Self {
            exit_code: Some(0),
            duration,
            success: true,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: Option<i32>, duration: Duration) -> Self {
        Self {
            exit_code,
            duration,
            success: false,
        }
    }
}

/// Options for command execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommandOptions {
    /// Inherit stdin/stdout/stderr from the parent instead of discarding them.
    pub inherit_stdio: bool,
}

/// Runs shell commands on behalf of the checker and the installers.
pub trait CommandRunner {
    /// Run a probe command with its output discarded.
    ///
    /// `Ok(true)` means exit code 0, `Ok(false)` any other exit. `Err` means
    /// the command could not be run at all.
    fn probe(&self, command: &str) -> io::Result<bool>;

    /// Run a command attached to the user's terminal.
    fn run_interactive(&self, command: &str) -> Result<CommandResult>;
}

/// [`CommandRunner`] backed by the host shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn probe(&self, command: &str) -> io::Result<bool> {
        execute(command, CommandOptions::default()).map(|r| r.success)
    }

    fn run_interactive(&self, command: &str) -> Result<CommandResult> {
        Ok(execute(
            command,
            CommandOptions {
                inherit_stdio: true,
            },
        )?)
    }
}

/// Execute a shell command and wait for it to exit.
pub fn execute(command: &str, options: CommandOptions) -> io::Result<CommandResult> {
    let start = Instant::now();

    let mut cmd = Command::new(shell_program());
    cmd.arg(shell_flag());
    cmd.arg(command);

    if options.inherit_stdio {
        cmd.stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
    } else {
        cmd.stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
    }

    tracing::debug!("Executing `{}` (inherit_stdio={})", command, options.inherit_stdio);
    let status = cmd.status()?;
    let duration = start.elapsed();

    if status.success() {
        Ok(CommandResult::success(duration))
    } else {
        Ok(CommandResult::failure(status.code(), duration))
    }
}

fn shell_program() -> String {
    if cfg!(target_os = "windows") {
        std::env::var("COMSPEC").unwrap_or_else(|_| "cmd.exe".to_string())
    } else {
        "/bin/sh".to_string()
    }
}

fn shell_flag() -> &'static str {
    if cfg!(target_os = "windows") {
        "/C"
    } else {
        "-c"
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn execute_successful_command() {
        let result = execute("exit 0", CommandOptions::default()).unwrap();

        assert!(result.success);
        assert_eq!(result.exit_code, Some(0));
    }

    #[test]
    fn execute_failing_command() {
        let result = execute("exit 3", CommandOptions::default()).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, Some(3));
    }

    #[test]
    fn missing_program_reports_absent() {
        let runner = SystemRunner::new();
        assert!(!runner.probe("definitely-not-a-real-binary-4f1c").unwrap());
    }

    #[test]
    fn system_runner_probe_reports_exit_status() {
        let runner = SystemRunner::new();
        assert!(runner.probe("true").unwrap());
        assert!(!runner.probe("false").unwrap());
    }

    #[test]
    fn system_runner_interactive_reports_failure_code() {
        let runner = SystemRunner::new();
        let result = runner.run_interactive("exit 7").unwrap();
        assert!(!result.success);
        assert_eq!(result.exit_code, Some(7));
    }

    #[test]
    fn command_result_tracks_duration() {
        let result = execute("sleep 0.2", CommandOptions::default()).unwrap();
        assert!(result.success);
        assert!(result.duration >= Duration::from_millis(150));
    }
}
