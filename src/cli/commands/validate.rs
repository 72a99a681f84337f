//! Validate command implementation.
//!
//! The `prereq validate` command checks that an answer is not empty.

use crate::cli::args::ValidateArgs;
use crate::error::Result;
use crate::ui::UserInterface;
use crate::validate::is_valid_input;

use super::dispatcher::{Command, CommandResult};

/// The validate command implementation.
pub struct ValidateCommand {
    args: ValidateArgs,
}

impl ValidateCommand {
    /// Create a new validate command.
    pub fn new(args: ValidateArgs) -> Self {
        Self { args }
    }
}

impl Command for ValidateCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if is_valid_input(ui, self.args.input.as_deref()) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    fn run(input: Option<&str>) -> (CommandResult, MockUI) {
        let mut ui = MockUI::new();
        let cmd = ValidateCommand::new(ValidateArgs {
            input: input.map(String::from),
        });
        let result = cmd.execute(&mut ui).unwrap();
        (result, ui)
    }

    #[test]
    fn accepts_non_empty() {
        let (result, ui) = run(Some("my-app"));
        assert!(result.success);
        assert!(ui.errors().is_empty());
    }

    #[test]
    fn rejects_empty_and_missing() {
        for input in [Some(""), None] {
            let (result, ui) = run(input);
            assert_eq!(result.exit_code, 1);
            assert!(ui.has_error("Can't be empty!"));
        }
    }
}
