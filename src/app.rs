//! Application state and core logic

use crate::clipboard::{ClipboardProvider, SystemClipboard};
use crate::config::ContactFormConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, ErrorSet, Focus, FormField, FormObserver, SubmissionRecord};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Logs engine notifications
#[derive(Debug, Default)]
struct TracingObserver;

impl FormObserver for TracingObserver {
    fn on_change(&mut self, errors: &ErrorSet) {
        tracing::debug!(errors = errors.len(), "form changed");
    }

    fn on_submit(&mut self, record: &SubmissionRecord) {
        tracing::debug!(
            submission_id = %record.submission_id,
            has_message = record.message.is_some(),
            "form submitted"
        );
    }
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// Feedback shown in the status bar until the next key press
    pub copy_message: Option<String>,
    /// Destination for copied summaries
    clipboard: Box<dyn ClipboardProvider>,
}

impl App {
    /// Create a new App instance backed by the system clipboard
    pub fn new(config: &ContactFormConfig) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard))
    }

    pub fn with_clipboard(config: &ContactFormConfig, clipboard: Box<dyn ClipboardProvider>) -> Self {
        let mut state = AppState::new(config.show_help(), config.copy_summary_on_submit());
        state.form.subscribe(Box::new(TracingObserver));

        Self {
            state,
            quit: false,
            copy_message: None,
            clipboard,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.copy_message = None;

        // AltGr arrives as Ctrl+Alt on Windows, so only a lone Ctrl makes a chord
        let alt = key.modifiers.contains(KeyModifiers::ALT);
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('y') if key.modifiers.contains(COPY_MODIFIER) && !alt => {
                self.copy_summary()
            }
            KeyCode::Char('s') if ctrl && !alt => self.submit(),
            KeyCode::Char('c') if ctrl && !alt => self.quit(),
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(),
            KeyCode::Enter => {
                if self.state.focus.is_submit_button() {
                    self.submit();
                } else if self.state.focus.is_multiline() {
                    self.edit_focused(|field| field.push_char('\n'));
                } else {
                    self.state.next_focus();
                }
            }
            KeyCode::Backspace => self.edit_focused(FormField::pop_char),
            KeyCode::Char(c) if ctrl == alt => self.edit_focused(|field| field.push_char(c)),
            _ => {}
        }
        Ok(())
    }

    /// Apply an edit to the focused field and hand the result to the engine
    fn edit_focused(&mut self, edit: impl FnOnce(&mut FormField)) {
        let Some(name) = self.state.focus.field() else {
            return;
        };
        let mut field = self.state.form.state().get(name).clone();
        edit(&mut field);
        self.state.form.update_field(name, field.value);
    }

    /// Submit the form; on rejection focus moves to the first failing field
    pub fn submit(&mut self) {
        match self.state.form.submit() {
            Ok(record) => {
                self.state.focus = Focus::default();
                self.copy_message = Some("Submitted".to_string());
                if self.state.copy_summary_on_submit {
                    self.copy_text(&record.summary_text());
                }
            }
            Err(errors) => {
                if let Some((field, _)) = errors.iter().next() {
                    self.state.focus = Focus::from(field);
                }
            }
        }
    }

    /// Copy the last submission summary to the clipboard
    pub fn copy_summary(&mut self) {
        let Some(text) = self.state.form.last_submission().map(|r| r.summary_text()) else {
            self.copy_message = Some("Nothing submitted yet".to_string());
            return;
        };
        self.copy_text(&text);
    }

    fn copy_text(&mut self, text: &str) {
        match self.clipboard.set_text(text) {
            Ok(()) => self.copy_message = Some("Copied summary".to_string()),
            Err(e) => {
                tracing::warn!("clipboard copy failed: {e}");
                self.push_error(format!("Failed to copy to clipboard: {e}"));
            }
        }
    }
}
