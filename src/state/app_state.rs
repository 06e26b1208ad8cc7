//! Application state definitions

use super::forms::{Focus, FormValidationEngine};
use std::collections::VecDeque;

/// Global application state
#[derive(Debug, Default)]
pub struct AppState {
    /// Contact form engine, the only source of truth for field values
    pub form: FormValidationEngine,
    /// Control receiving keyboard input
    pub focus: Focus,
    /// Whether the key hint line is shown under the form
    pub show_help: bool,
    /// Copy the summary to the clipboard after each successful submit
    pub copy_summary_on_submit: bool,
    /// Errors waiting to be shown in the error dialog, oldest first
    error_queue: VecDeque<String>,
}

impl AppState {
    pub fn new(show_help: bool, copy_summary_on_submit: bool) -> Self {
        Self {
            show_help,
            copy_summary_on_submit,
            ..Self::default()
        }
    }

    pub fn next_focus(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn prev_focus(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Queue an error for the error dialog
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.error_queue.is_empty()
    }

    /// The error currently shown in the dialog
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_state() {
        let state = AppState::default();
        assert_eq!(state.focus, Focus::FirstName);
        assert!(!state.has_errors());
        assert!(state.form.errors().is_empty());
    }

    #[test]
    fn test_new_applies_flags() {
        let state = AppState::new(true, true);
        assert!(state.show_help);
        assert!(state.copy_summary_on_submit);
    }

    #[test]
    fn test_error_queue_is_fifo() {
        let mut state = AppState::default();
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(!state.has_errors());
        assert_eq!(state.current_error(), None);
    }

    #[test]
    fn test_dismiss_on_empty_queue_is_noop() {
        let mut state = AppState::default();
        state.dismiss_error();
        assert!(!state.has_errors());
    }

    #[test]
    fn test_focus_navigation() {
        let mut state = AppState::default();
        state.prev_focus();
        assert_eq!(state.focus, Focus::SubmitButton);
        state.next_focus();
        assert_eq!(state.focus, Focus::FirstName);
    }
}
