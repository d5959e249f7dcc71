//! Interactive pattern prompt
//!
//! Inclusion patterns are collected from stdin as a comma-separated list.
//! The prompt itself goes to stderr so stdout stays clean for piped output.
//! End-of-input at the prompt is a cancellation, not an error. A SIGINT at
//! the prompt terminates the process with the default signal disposition
//! before the cancellation message can be printed; only closed stdin takes
//! the `Cancelled` path.

use std::io::{self, BufRead, Write};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PromptError {
    /// Stdin was closed or interrupted at the prompt
    #[error("operation cancelled by user")]
    Cancelled,

    #[error("file pattern list cannot be empty")]
    Empty,

    #[error("could not read from stdin: {0}")]
    Io(#[from] io::Error),
}

/// Ask for inclusion patterns; returns the trimmed, non-empty list
pub fn ask_patterns() -> Result<Vec<String>, PromptError> {
    eprint!("Enter file patterns, separated by commas (e.g., *.md, *.rs, *.toml): ");
    io::stderr().flush()?;

    let mut line = String::new();
    let bytes_read = io::stdin().lock().read_line(&mut line)?;
    if bytes_read == 0 {
        return Err(PromptError::Cancelled);
    }

    let patterns = split_list(&line);
    if patterns.is_empty() {
        return Err(PromptError::Empty);
    }

    Ok(patterns)
}

/// Split a comma-separated list, trimming whitespace and dropping empties
fn split_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .map(String::from)
        .collect()
}
