//! Clipboard abstraction so copy behavior can be mocked in tests

use anyhow::Result;

/// Something that can receive copied text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardProvider {
    /// Replace the clipboard contents with `text`
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// The system clipboard
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardProvider for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}
