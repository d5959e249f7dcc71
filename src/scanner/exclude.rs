//! Exclusion rules
//!
//! Two layers, checked in this order: a built-in set of directory names that
//! are always pruned, then user-supplied tokens matched against either a bare
//! name or a root-relative path. Pruning happens before descent, so nothing
//! under an excluded directory is ever visited.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Directory names that are always pruned (case-sensitive)
pub static FIXED_EXCLUDE_DIRS: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    [
        "node_modules",
        "bin",
        "obj",
        ".git",
        "__pycache__",
        ".idea",
        "workbench",
        ".venv",
        "target",
    ]
    .into_iter()
    .collect()
});

/// User-supplied exclusion tokens
#[derive(Debug, Clone, Default)]
pub struct ExcludeSet {
    tokens: HashSet<String>,
}

impl ExcludeSet {
    /// Parse a comma-separated token list, trimming whitespace and dropping empties
    pub fn parse(raw: &str) -> Self {
        let tokens = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        Self { tokens }
    }

    /// True when no token was supplied
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Iterate the tokens, for the scan banner
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// True when the token set names this entry, by bare name or relative path
    pub fn contains(&self, name: &str, rel_path: &str) -> bool {
        self.tokens.contains(name) || self.tokens.contains(rel_path)
    }
}

/// True when a directory must be pruned before descending.
/// Built-in names are checked first, then the dynamic set.
pub fn prune_dir(name: &str, rel_path: &str, dynamic: &ExcludeSet) -> bool {
    FIXED_EXCLUDE_DIRS.contains(name) || dynamic.contains(name, rel_path)
}
