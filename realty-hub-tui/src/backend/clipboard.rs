//! System clipboard
//!
//! Wraps `arboard`. Without a display server (SSH, CI) opening fails; the app
//! then runs with a clipboard that refuses every write, so copy still reports
//! its failure instead of pretending to succeed.

use realty_hub_core::{Clipboard, CoreError, CoreResult, InMemoryClipboard};

pub struct SystemClipboard {
    inner: arboard::Clipboard,
}

impl SystemClipboard {
    pub fn new() -> CoreResult<Self> {
        let inner = arboard::Clipboard::new()
            .map_err(|e| CoreError::ClipboardUnavailable(e.to_string()))?;
        Ok(Self { inner })
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> CoreResult<()> {
        self.inner
            .set_text(text)
            .map_err(|e| CoreError::ClipboardUnavailable(e.to_string()))
    }
}

/// Best available clipboard for this session
pub fn open_clipboard() -> Box<dyn Clipboard> {
    match SystemClipboard::new() {
        Ok(clipboard) => {
            log::info!("System clipboard ready");
            Box::new(clipboard)
        }
        Err(err) => {
            log::warn!("{err}; copy actions will fail");
            Box::new(InMemoryClipboard::failing(err.to_string()))
        }
    }
}
