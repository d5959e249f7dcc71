//! Delimiter-block rendering
//!
//! Each collected file is wrapped in a START/END delimiter pair carrying its
//! root-relative path. Blocks are concatenated with no extra separators, and
//! an empty or whitespace-only file renders a placeholder body so the block
//! is never blank.

use crate::core::model::{ConcatResult, FileEntry};

/// Body substituted for files with empty or whitespace-only content
pub const EMPTY_FILE_PLACEHOLDER: &str = "[EMPTY FILE]";

/// Render a single file block
pub fn render_block(entry: &FileEntry) -> String {
    let body = if entry.content.trim().is_empty() {
        EMPTY_FILE_PLACEHOLDER
    } else {
        entry.content.as_str()
    };

    format!(
        "\n--- START: {path} ---\n{body}\n--- END: {path} ---\n",
        path = entry.path,
        body = body
    )
}

/// Render the whole result as one blob
pub fn render(result: &ConcatResult) -> String {
    result.entries.iter().map(render_block).collect()
}
