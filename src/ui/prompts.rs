//! Interactive prompts.

use console::Term;
use dialoguer::Confirm;

use crate::error::{PrereqError, Result};

use super::Prompt;

/// Convert dialoguer errors to PrereqError.
fn map_dialoguer_err(e: dialoguer::Error) -> PrereqError {
    PrereqError::Io(e.into())
}

/// Ask a yes/no question on `term`.
pub fn confirm_on(prompt: &Prompt, term: &Term) -> Result<bool> {
    Confirm::new()
        .with_prompt(&prompt.question)
        .default(prompt.default)
        .interact_on(term)
        .map_err(map_dialoguer_err)
}
