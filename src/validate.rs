//! Input validation for interactive answers.

use crate::ui::UserInterface;

/// Message shown when a required answer is missing.
pub const EMPTY_INPUT_MESSAGE: &str = "Can't be empty!";

/// Check that `input` is present and non-empty.
///
/// Reports [`EMPTY_INPUT_MESSAGE`] on `ui` when it is not. Whitespace-only
/// input counts as present.
pub fn is_valid_input(ui: &mut dyn UserInterface, input: Option<&str>) -> bool {
    match input {
        Some(value) if !value.is_empty() => true,
        _ => {
            ui.error(EMPTY_INPUT_MESSAGE);
            false
        }
    }
}
