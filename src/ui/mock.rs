//! Mock UI implementation for testing.
//!
//! `MockUI` implements the `UserInterface` trait and captures all
//! interactions for later assertion. It can be configured with
//! pre-determined prompt responses.
//!
//! # Example
//!
//! ```
//! use prereq::ui::{MockUI, UserInterface};
//!
//! let mut ui = MockUI::new();
//! ui.set_prompt_response("install_git", "yes");
//!
//! // Use ui in code under test...
//! ui.message("Checking git");
//! ui.success("Done!");
//!
//! // Assert on captured interactions
//! assert!(ui.messages().contains(&"Checking git".to_string()));
//! assert!(ui.successes().contains(&"Done!".to_string()));
//! ```

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;

use super::{parse_yes, OutputMode, Prompt, SpinnerHandle, UserInterface};

/// Mock UI implementation for testing.
///
/// Captures all UI interactions and allows pre-configured prompt responses.
/// Spinners handed out by [`start_spinner`](UserInterface::start_spinner)
/// write back into the mock, so their final state can be inspected after
/// the handle has been dropped.
#[derive(Debug, Default)]
pub struct MockUI {
    mode: OutputMode,
    messages: Vec<String>,
    successes: Vec<String>,
    warnings: Vec<String>,
    errors: Vec<String>,
    hints: Vec<String>,
    spinners: Rc<RefCell<Vec<SpinnerRecord>>>,
    prompt_responses: HashMap<String, String>,
    prompts_shown: Vec<Prompt>,
}

impl MockUI {
    /// Create a new MockUI with Normal output mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a MockUI reporting the given output mode.
    pub fn with_mode(mode: OutputMode) -> Self {
        Self {
            mode,
            ..Default::default()
        }
    }

    /// Set a response for a prompt key.
    ///
    /// When `confirm()` is called with this key, the response is read as yes/no.
    pub fn set_prompt_response(&mut self, key: &str, response: &str) {
        self.prompt_responses
            .insert(key.to_string(), response.to_string());
    }

    /// Get all captured messages.
    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Get all captured success messages.
    pub fn successes(&self) -> &[String] {
        &self.successes
    }

    /// Get all captured warning messages.
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Get all captured error messages.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Get all captured hints.
    pub fn hints(&self) -> &[String] {
        &self.hints
    }

    /// Get all prompts that were shown.
    pub fn prompts_shown(&self) -> &[Prompt] {
        &self.prompts_shown
    }

    /// Get a snapshot of every spinner started so far.
    pub fn spinners(&self) -> Vec<SpinnerRecord> {
        self.spinners.borrow().clone()
    }

    /// Check if a specific message was shown.
    pub fn has_message(&self, msg: &str) -> bool {
        self.messages.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific success was shown.
    pub fn has_success(&self, msg: &str) -> bool {
        self.successes.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific warning was shown.
    pub fn has_warning(&self, msg: &str) -> bool {
        self.warnings.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific error was shown.
    pub fn has_error(&self, msg: &str) -> bool {
        self.errors.iter().any(|m| m.contains(msg))
    }

    /// Check if a specific hint was shown.
    pub fn has_hint(&self, msg: &str) -> bool {
        self.hints.iter().any(|m| m.contains(msg))
    }
}

impl UserInterface for MockUI {
    fn output_mode(&self) -> OutputMode {
        self.mode
    }

    fn message(&mut self, msg: &str) {
        self.messages.push(msg.to_string());
    }

    fn success(&mut self, msg: &str) {
        self.successes.push(msg.to_string());
    }

    fn warning(&mut self, msg: &str) {
        self.warnings.push(msg.to_string());
    }

    fn error(&mut self, msg: &str) {
        self.errors.push(msg.to_string());
    }

    fn confirm(&mut self, prompt: &Prompt) -> Result<bool> {
        self.prompts_shown.push(prompt.clone());

        Ok(self
            .prompt_responses
            .get(&prompt.key)
            .map(|value| parse_yes(value))
            .unwrap_or(prompt.default))
    }

    fn start_spinner(&mut self, message: &str) -> Box<dyn SpinnerHandle> {
        let index = {
            let mut records = self.spinners.borrow_mut();
            records.push(SpinnerRecord::new(message));
            records.len() - 1
        };
        Box::new(MockSpinner {
            records: Rc::clone(&self.spinners),
            index,
        })
    }

    fn show_hint(&mut self, hint: &str) {
        self.hints.push(hint.to_string());
    }
}

/// What happened to one spinner over its lifetime.
#[derive(Debug, Clone, Default)]
pub struct SpinnerRecord {
    /// Message the spinner was started with.
    pub start_message: String,
    /// How many times the spinner was taken off the terminal.
    pub suspended: usize,
    /// Message the spinner finished with.
    pub finish_message: Option<String>,
    /// Final status, if the spinner was finished.
    pub status: Option<SpinnerStatus>,
}

impl SpinnerRecord {
    fn new(start_message: &str) -> Self {
        Self {
            start_message: start_message.to_string(),
            ..Default::default()
        }
    }
}

/// Status of a mock spinner when finished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpinnerStatus {
    /// Finished successfully.
    Success,
    /// Finished with error.
    Error,
    /// Finished as skipped.
    Skipped,
}

/// Mock spinner that writes its state back into the owning [`MockUI`].
#[derive(Debug)]
pub struct MockSpinner {
    records: Rc<RefCell<Vec<SpinnerRecord>>>,
    index: usize,
}

impl MockSpinner {
    /// Create a standalone mock spinner.
    pub fn new() -> Self {
        Self {
            records: Rc::new(RefCell::new(vec![SpinnerRecord::default()])),
            index: 0,
        }
    }

    /// Get a snapshot of this spinner's state.
    pub fn record(&self) -> SpinnerRecord {
        self.records.borrow()[self.index].clone()
    }

    fn finish(&mut self, msg: &str, status: SpinnerStatus) {
        let mut records = self.records.borrow_mut();
        let record = &mut records[self.index];
        record.finish_message = Some(msg.to_string());
        record.status = Some(status);
    }
}

impl Default for MockSpinner {
    fn default() -> Self {
        Self::new()
    }
}

impl SpinnerHandle for MockSpinner {
    fn suspend(&mut self, f: &mut dyn FnMut()) {
        self.records.borrow_mut()[self.index].suspended += 1;
        f();
    }

    fn finish_success(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Success);
    }

    fn finish_error(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Error);
    }

    fn finish_skipped(&mut self, msg: &str) {
        self.finish(msg, SpinnerStatus::Skipped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn confirm(key: &str, default: bool) -> Prompt {
        Prompt {
            key: key.to_string(),
            question: "Install?".to_string(),
            default,
        }
    }

    #[test]
    fn mock_ui_captures_messages() {
        let mut ui = MockUI::new();

        ui.message("Hello");
        ui.success("Done");
        ui.warning("Be careful");
        ui.error("Oops");
        ui.show_hint("Try again");

        assert_eq!(ui.messages(), &["Hello"]);
        assert_eq!(ui.successes(), &["Done"]);
        assert_eq!(ui.warnings(), &["Be careful"]);
        assert_eq!(ui.errors(), &["Oops"]);
        assert_eq!(ui.hints(), &["Try again"]);
    }

    #[test]
    fn confirm_uses_configured_response() {
        let mut ui = MockUI::new();
        ui.set_prompt_response("install_git", "no");

        assert!(!ui.confirm(&confirm("install_git", true)).unwrap());
        assert_eq!(ui.prompts_shown()[0].key, "install_git");
    }

    #[test]
    fn confirm_falls_back_to_default() {
        let mut ui = MockUI::new();
        assert!(ui.confirm(&confirm("install_git", true)).unwrap());
        assert!(!ui.confirm(&confirm("install_docker", false)).unwrap());
    }

    #[test]
    fn reports_configured_mode() {
        assert_eq!(MockUI::new().output_mode(), OutputMode::Normal);
        assert_eq!(
            MockUI::with_mode(OutputMode::Verbose).output_mode(),
            OutputMode::Verbose
        );
    }

    #[test]
    fn spinner_state_survives_handle_drop() {
        let mut ui = MockUI::new();
        {
            let mut spinner = ui.start_spinner("Installing git");
            spinner.suspend(&mut || {});
            spinner.finish_success("You're good to go");
        }

        let spinners = ui.spinners();
        assert_eq!(spinners.len(), 1);
        assert_eq!(spinners[0].start_message, "Installing git");
        assert_eq!(spinners[0].suspended, 1);
        assert_eq!(spinners[0].status, Some(SpinnerStatus::Success));
        assert_eq!(
            spinners[0].finish_message.as_deref(),
            Some("You're good to go")
        );
    }

    #[test]
    fn each_spinner_is_independent() {
        let mut ui = MockUI::new();
        let mut first = ui.start_spinner("Installing git");
        let mut second = ui.start_spinner("Installing docker");
        second.finish_error("Something went wrong");
        first.finish_skipped("Install git manually");

        let spinners = ui.spinners();
        assert_eq!(spinners[0].status, Some(SpinnerStatus::Skipped));
        assert_eq!(spinners[1].status, Some(SpinnerStatus::Error));
    }

    #[test]
    fn standalone_mock_spinner_records() {
        let mut spinner = MockSpinner::new();
        spinner.finish_error("failed");
        assert_eq!(spinner.record().status, Some(SpinnerStatus::Error));
    }
}
