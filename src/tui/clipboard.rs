//! # Clipboard
//!
//! Thin trait over the OS clipboard so copy handling can be tested with a
//! failing or recording double. `arboard` can refuse to initialize on a
//! headless system; that surfaces as a copy error, not a crash.

use std::fmt;

#[derive(Debug)]
pub enum ClipboardError {
    /// No system clipboard is available (headless session, missing display).
    Unavailable,
    /// The clipboard exists but the write was rejected.
    Write(String),
}

impl fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClipboardError::Unavailable => write!(f, "no system clipboard available"),
            ClipboardError::Write(msg) => write!(f, "clipboard write failed: {msg}"),
        }
    }
}

impl std::error::Error for ClipboardError {}

/// A write-only clipboard. The operation is atomic: it either places the
/// whole text or fails without partial effects.
pub trait Clipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        let inner = match arboard::Clipboard::new() {
            Ok(clipboard) => Some(clipboard),
            Err(e) => {
                log::warn!("System clipboard unavailable: {e}");
                None
            }
        };
        Self { inner }
    }
}

impl Default for SystemClipboard {
    fn default() -> Self {
        Self::new()
    }
}

impl Clipboard for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let clipboard = self.inner.as_mut().ok_or(ClipboardError::Unavailable)?;
        clipboard
            .set_text(text.to_string())
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}
