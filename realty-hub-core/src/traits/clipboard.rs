//! Clipboard abstraction Trait

use crate::error::{CoreError, CoreResult};

/// Clipboard write collaborator
///
/// Platform implementations:
/// - TUI: `SystemClipboard` (arboard crate)
/// - Tests / headless: [`InMemoryClipboard`]
///
/// Implementations report any refusal as [`CoreError::ClipboardUnavailable`].
pub trait Clipboard {
    /// Replace the clipboard contents with `text`
    fn write_text(&mut self, text: &str) -> CoreResult<()>;
}

/// Clipboard held in process memory
///
/// Can be switched into a failing mode to exercise the error path.
#[derive(Debug, Default)]
pub struct InMemoryClipboard {
    contents: Option<String>,
    failure: Option<String>,
    writes: usize,
}

impl InMemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// A clipboard that rejects every write with `reason`
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            failure: Some(reason.into()),
            ..Self::default()
        }
    }

    pub fn set_failure(&mut self, reason: Option<String>) {
        self.failure = reason;
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl Clipboard for InMemoryClipboard {
    fn write_text(&mut self, text: &str) -> CoreResult<()> {
        if let Some(ref reason) = self.failure {
            return Err(CoreError::ClipboardUnavailable(reason.clone()));
        }
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stores_last_write() {
        let mut clipboard = InMemoryClipboard::new();
        clipboard.write_text("one").unwrap();
        clipboard.write_text("two").unwrap();
        assert_eq!(clipboard.contents(), Some("two"));
        assert_eq!(clipboard.writes(), 2);
    }

    #[test]
    fn failing_clipboard_keeps_contents() {
        let mut clipboard = InMemoryClipboard::new();
        clipboard.write_text("kept").unwrap();
        clipboard.set_failure(Some("permission denied".to_string()));

        let err = clipboard.write_text("lost").unwrap_err();
        assert_eq!(err, CoreError::ClipboardUnavailable("permission denied".to_string()));
        assert_eq!(clipboard.contents(), Some("kept"));
        assert_eq!(clipboard.writes(), 1);
    }
}
