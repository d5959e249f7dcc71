//! Concatenation result model
//!
//! A scan produces an ordered sequence of (relative path, content) pairs.
//! Order follows filesystem enumeration order and is never sorted.

/// One file collected during a scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the scan root, using '/' as separator
    pub path: String,

    /// Decoded file content
    pub content: String,
}

impl FileEntry {
    /// Create a new entry
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}

/// The ordered collection of files a scan produced
#[derive(Debug, Clone, Default)]
pub struct ConcatResult {
    pub entries: Vec<FileEntry>,
}

impl ConcatResult {
    /// Create an empty result
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry, preserving discovery order
    pub fn push(&mut self, entry: FileEntry) {
        self.entries.push(entry);
    }

    /// Number of collected files
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no file was collected
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
