//! Check command implementation.
//!
//! The `prereq check` command reports which dependencies are installed.

use serde::Serialize;

use crate::cli::args::CheckArgs;
use crate::error::{PrereqError, Result};
use crate::requirements::{checker, Dependency, InstallStatus};
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};
use super::resolve_dependencies;

/// One row of `prereq check --json` output.
#[derive(Debug, Serialize)]
struct CheckEntry {
    name: Dependency,
    probe: &'static str,
    #[serde(flatten)]
    status: InstallStatus,
}

/// The check command implementation.
pub struct CheckCommand<'a> {
    args: CheckArgs,
    runner: &'a dyn CommandRunner,
}

impl<'a> CheckCommand<'a> {
    /// Create a new check command.
    pub fn new(args: CheckArgs, runner: &'a dyn CommandRunner) -> Self {
        Self { args, runner }
    }
}

impl Command for CheckCommand<'_> {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let deps = match resolve_dependencies(&self.args.deps) {
            Ok(deps) => deps,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let entries: Vec<CheckEntry> = deps
            .into_iter()
            .map(|dep| CheckEntry {
                name: dep,
                probe: dep.probe_command(),
                status: checker::check(self.runner, dep.probe_command()),
            })
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| PrereqError::Other(e.into()))?;
            ui.message(&json);
        } else {
            let details = ui.output_mode().shows_details();
            for entry in &entries {
                match &entry.status {
                    InstallStatus::Installed => {
                        ui.success(&format!("{} is installed", entry.name))
                    }
                    InstallStatus::Absent => {
                        ui.warning(&format!("{} is not installed", entry.name))
                    }
                    InstallStatus::ProbeError { message } => ui.warning(&format!(
                        "{} could not be checked: {}",
                        entry.name, message
                    )),
                }
                if details {
                    ui.message(&format!("  checked with `{}`", entry.probe));
                }
            }
        }

        let missing = entries.iter().filter(|e| !e.status.is_installed()).count();
        if missing == 0 {
            Ok(CommandResult::success())
        } else {
            if !self.args.json {
                ui.show_hint("Run `prereq install` to install what is missing.");
            }
            Ok(CommandResult::failure(1))
        }
    }
}
