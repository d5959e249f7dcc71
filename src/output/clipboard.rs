//! System clipboard integration
//!
//! Availability is probed before the prompt and the scan, so a headless
//! session fails fast instead of after the work is done.

use arboard::Clipboard;
use thiserror::Error;

/// Clipboard failures, separated so the CLI can abort before scanning
#[derive(Debug, Error)]
pub enum ClipboardError {
    #[error("no clipboard mechanism is available on this platform: {0}")]
    Unavailable(#[source] arboard::Error),

    #[error("could not copy to clipboard: {0}")]
    CopyFailed(#[source] arboard::Error),
}

/// Probe that a clipboard is usable at all
pub fn probe() -> Result<(), ClipboardError> {
    Clipboard::new()
        .map(|_| ())
        .map_err(ClipboardError::Unavailable)
}

/// Copy text to the system clipboard
pub fn copy(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(ClipboardError::Unavailable)?;
    clipboard
        .set_text(text.to_string())
        .map_err(ClipboardError::CopyFailed)
}
