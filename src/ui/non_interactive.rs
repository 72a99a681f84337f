//! Non-interactive UI for CI/headless environments.
//!
//! Nothing is ever asked on the terminal. A confirmation is answered from a
//! `PREREQ_PROMPT_<KEY>` environment variable when one is set, and declines
//! otherwise, so no install runs unattended.

use std::collections::HashMap;

use crate::error::Result;

use super::{parse_yes, OutputMode, PrereqTheme, Prompt, SpinnerHandle, UserInterface};

/// Prefix of the environment variables that answer prompts.
pub const PROMPT_ENV_PREFIX: &str = "PREREQ_PROMPT_";

/// UI implementation for non-interactive mode.
pub struct NonInteractiveUI {
    mode: OutputMode,
    theme: PrereqTheme,
    env_overrides: HashMap<String, String>,
}

impl NonInteractiveUI {
    /// Create a new non-interactive UI.
    pub fn new(mode: OutputMode) -> Self {
        let env_overrides: HashMap<String, String> = std::env::vars()
            .filter(|(k, _)| k.starts_with(PROMPT_ENV_PREFIX))
            .collect();

        Self::with_overrides(mode, env_overrides)
    }

    /// Create with explicit overrides (for testing).
    pub fn with_overrides(mode: OutputMode, overrides: HashMap<String, String>) -> Self {
        Self {
            mode,
            theme: PrereqTheme::plain(),
            env_overrides: overrides,
        }
    }

    fn override_for(&self, key: &str) -> Option<&String> {
        let env_key = format!(
            "{}{}",
            PROMPT_ENV_PREFIX,
            key.to_uppercase().replace('-', "_")
        );
        self.env_overrides.get(&env_key)
    }
}

impl UserInterface for NonInteractiveUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        println!("{}", msg);
    }

    fn success(&mut self, msg: &str) {
        if self.mode.shows_success() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn warning(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_warning(msg));
    }

    fn error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        let answer = self.override_for(&prompt.key);
        tracing::debug!(
            "Non-interactive prompt '{}' answered with {:?}",
            prompt.key,
            answer
        );
        Ok(answer.map(|a| parse_yes(a)).unwrap_or(false))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        println!("{}", message);
        Box::new(LineSpinner {
            mode: self.mode,
            theme: self.theme.clone(),
        })
    }

    fn show_hint(&mut self, hint: &str) {
        if self.mode.shows_hints() {
            println!("  {}", hint);
        }
    }
}

/// Spinner stand-in that prints the final status as a plain line.
struct LineSpinner {
    mode: OutputMode,
    theme: PrereqTheme,
}

impl SpinnerHandle for LineSpinner {
    fn suspend(&mut self, f: &mut dyn FnMut()) {
        f();
    }

    fn finish_success(&mut self, msg: &str) {
        if self.mode.shows_success() {
            println!("{}", self.theme.format_success(msg));
        }
    }

    fn finish_error(&mut self, msg: &str) {
        eprintln!("{}", self.theme.format_error(msg));
    }

    fn finish_skipped(&mut self, msg: &str) {
        println!("{}", self.theme.format_skipped(msg));
    }
}
