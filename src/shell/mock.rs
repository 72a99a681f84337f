//! Mock command runner for testing.
//!
//! `MockRunner` implements [`CommandRunner`] without touching the host
//! shell. Probe results and interactive exit codes are scripted up front,
//! and every command is recorded for later assertion.
//!
//! # Example
//!
//! ```
//! use prereq::shell::{CommandRunner, MockRunner};
//!
//! let runner = MockRunner::new();
//! runner.set_probe("docker", true);
//! runner.fail_command("apt install git", 100);
//!
//! assert!(runner.probe("docker").unwrap());
//! assert!(!runner.run_interactive("apt install git").unwrap().success);
//! assert_eq!(runner.commands_run(), vec!["apt install git".to_string()]);
//! ```

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::io;
use std::time::Duration;

use crate::error::Result;

use super::command::{CommandResult, CommandRunner};

/// Scripted [`CommandRunner`].
///
/// Unscripted probes report "not installed"; unscripted interactive
/// commands succeed.
#[derive(Debug, Default)]
pub struct MockRunner {
    probe_results: RefCell<HashMap<String, bool>>,
    probe_errors: RefCell<HashSet<String>>,
    failing_commands: RefCell<HashMap<String, i32>>,
    probes_run: RefCell<Vec<String>>,
    commands_run: RefCell<Vec<String>>,
}

impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a probe command exits zero.
    pub fn set_probe(&self, command: &str, present: bool) {
        self.probe_results
            .borrow_mut()
            .insert(command.to_string(), present);
    }

    /// Make a probe command fail to run at all.
    pub fn set_probe_error(&self, command: &str) {
        self.probe_errors.borrow_mut().insert(command.to_string());
    }

    /// Make an interactive command exit with the given non-zero code.
    pub fn fail_command(&self, command: &str, code: i32) {
        self.failing_commands
            .borrow_mut()
            .insert(command.to_string(), code);
    }

    /// Probe commands run so far, in order.
    pub fn probes_run(&self) -> Vec<String> {
        self.probes_run.borrow().clone()
    }

    /// Interactive commands run so far, in order.
    pub fn commands_run(&self) -> Vec<String> {
        self.commands_run.borrow().clone()
    }
}

impl CommandRunner for MockRunner {
    fn probe(&self, command: &str) -> io::Result<bool> {
        self.probes_run.borrow_mut().push(command.to_string());

        if self.probe_errors.borrow().contains(command) {
            return Err(io::Error::new(
                io::ErrorKind::NotFound,
                "shell unavailable",
            ));
        }

        Ok(self
            .probe_results
            .borrow()
            .get(command)
            .copied()
            .unwrap_or(false))
    }

    fn run_interactive(&self, command: &str) -> Result<CommandResult> {
        self.commands_run.borrow_mut().push(command.to_string());

        match self.failing_commands.borrow().get(command) {
            Some(code) => Ok(CommandResult::failure(Some(*code), Duration::ZERO)),
            None => Ok(CommandResult::success(Duration::ZERO)),
        }
    }
}
