//! Output sinks
//!
//! Priority when several sinks are requested: file > clipboard > stdout.
//! Selecting a higher-priority sink leaves the lower ones untouched; with
//! --output and --copy together the clipboard is never even initialized.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::output::clipboard;

/// Where the concatenated blob ends up
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sink {
    File(PathBuf),
    Clipboard,
    Stdout,
}

impl Sink {
    /// Select the sink from CLI flags, applying the priority order
    pub fn select(output: Option<PathBuf>, copy: bool) -> Self {
        match (output, copy) {
            (Some(path), _) => Sink::File(path),
            (None, true) => Sink::Clipboard,
            (None, false) => Sink::Stdout,
        }
    }

    /// Deliver the blob. Returns a success message for sinks that have one;
    /// stdout delivery speaks for itself.
    pub fn deliver(&self, content: &str) -> Result<Option<String>> {
        match self {
            Sink::File(path) => {
                fs::write(path, content).with_context(|| {
                    format!("could not write to output file '{}'", path.display())
                })?;
                Ok(Some(format!(
                    "All content has been written to '{}'.",
                    path.display()
                )))
            }
            Sink::Clipboard => {
                clipboard::copy(content)?;
                Ok(Some("Content has been copied to the clipboard.".to_string()))
            }
            Sink::Stdout => {
                print!("{}", content);
                Ok(None)
            }
        }
    }
}
