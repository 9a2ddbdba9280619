use crate::domain::traits::ClipboardSource;
use tracing::debug;

/// System clipboard via arboard.
///
/// A fresh handle is opened per read; some platforms invalidate long-lived
/// handles when the owning application changes.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }
}

impl ClipboardSource for SystemClipboard {
    fn read_text(&mut self) -> String {
        match arboard::Clipboard::new().and_then(|mut cb| cb.get_text()) {
            Ok(text) => text,
            Err(e) => {
                debug!("Clipboard has no text: {}", e);
                String::new()
            }
        }
    }
}
