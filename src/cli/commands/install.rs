//! Install command implementation.
//!
//! The `prereq install` command runs the check, ask, install flow for each
//! requested dependency in turn.

use crate::cli::args::InstallArgs;
use crate::error::Result;
use crate::requirements::{ensure_installed, EnsureOutcome, InstallerContext};
use crate::shell::{CommandRunner, Platform};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve_dependencies;

/// The install command implementation.
pub struct InstallCommand<'a> {
    args: InstallArgs,
    runner: &'a dyn CommandRunner,
    platform: Platform,
}

impl<'a> InstallCommand<'a> {
    /// Create a new install command.
    pub fn new(args: InstallArgs, runner: &'a dyn CommandRunner, platform: Platform) -> Self {
        Self {
            args,
            runner,
            platform,
        }
    }
}

impl Command for InstallCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let deps = match resolve_dependencies(&self.args.deps) {
            Ok(deps) => deps,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let details = ui.output_mode().shows_details();
        for dep in deps {
            if details {
                ui.message(&format!("Checking {} with `{}`", dep, dep.probe_command()));
            }
            let mut ctx = InstallerContext {
                ui: &mut *ui,
                runner: self.runner,
                platform: self.platform,
                assume_yes: self.args.yes,
            };

            match ensure_installed(dep, &mut ctx) {
                Ok(EnsureOutcome::AlreadyInstalled) => {
                    ui.success(&format!("{} is already installed", dep));
                }
                Ok(outcome) => {
                    tracing::debug!("{}: {:?}", dep, outcome);
                }
                Err(e) => {
                    ui.error(&format!("Failed to install {}: {}", dep, e));
                    return Ok(CommandResult::failure(1));
                }
            }
        }

        Ok(CommandResult::success())
    }
}
