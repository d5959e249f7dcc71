//! Top-down traversal with pruning
//!
//! Directories are filtered out before descent, so nothing under a pruned
//! directory is ever visited. Remaining files are matched against the
//! inclusion patterns, filtered through self- and dynamic exclusion, read
//! with best-effort decoding, and collected in platform enumeration order.

use std::env;
use std::path::{Path, PathBuf};

use walkdir::{DirEntry, WalkDir};

use crate::core::file_reader::read_text;
use crate::core::model::{ConcatResult, FileEntry};
use crate::core::paths::make_relative;
use crate::scanner::exclude::{prune_dir, ExcludeSet, FIXED_EXCLUDE_DIRS};
use crate::scanner::ScanRequest;

/// Scan the tree described by the request and collect matching files.
/// Per-file failures are reported on stderr and skipped; the scan itself
/// cannot fail.
pub fn scan(request: &ScanRequest) -> ConcatResult {
    if !request.quiet {
        print_banner(request);
    }

    let own_exe = self_identity();
    let mut result = ConcatResult::new();

    let walker = WalkDir::new(&request.root)
        .follow_links(false)
        .into_iter()
        .filter_entry(|entry| keep_entry(entry, &request.root, &request.exclude));

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                eprintln!("  ! Error reading entry: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if !request.patterns.matches(&name) {
            continue;
        }

        let rel_path = match make_relative(entry.path(), &request.root) {
            Some(rel) => rel,
            None => continue,
        };

        if is_self(entry.path(), &name, own_exe.as_deref()) {
            continue;
        }

        if request.exclude.contains(&name, &rel_path) {
            if !request.quiet {
                eprintln!("  - Skipping (excluded): {}", rel_path);
            }
            continue;
        }

        match read_text(entry.path()) {
            Ok(content) => {
                if !request.quiet {
                    eprintln!("  + Added: {}", rel_path);
                }
                result.push(FileEntry::new(rel_path, content));
            }
            Err(err) => {
                eprintln!("  ! Error reading file {}: {}", entry.path().display(), err);
            }
        }
    }

    result
}

/// Decide whether the walker may descend into (or yield) an entry.
/// The root itself and plain files always pass; directories go through the
/// exclusion layers.
fn keep_entry(entry: &DirEntry, root: &Path, dynamic: &ExcludeSet) -> bool {
    if entry.depth() == 0 || !entry.file_type().is_dir() {
        return true;
    }

    let name = entry.file_name().to_string_lossy();
    let rel_path = make_relative(entry.path(), root).unwrap_or_default();
    !prune_dir(&name, &rel_path, dynamic)
}

/// Canonical path of the running executable, for self-exclusion
fn self_identity() -> Option<PathBuf> {
    env::current_exe().ok().and_then(|p| p.canonicalize().ok())
}

/// True when the entry is the running executable itself.
/// The bare name is compared first so canonicalization only happens on
/// candidate matches.
fn is_self(path: &Path, name: &str, own_exe: Option<&Path>) -> bool {
    let Some(own_exe) = own_exe else {
        return false;
    };

    if own_exe.file_name().and_then(|n| n.to_str()) != Some(name) {
        return false;
    }

    path.canonicalize().map(|p| p == own_exe).unwrap_or(false)
}

fn print_banner(request: &ScanRequest) {
    eprintln!("\nStarting search in: {}", request.root.display());
    eprintln!(
        "Searching for patterns: {}",
        request.patterns.raw().join(", ")
    );

    let fixed: Vec<&str> = FIXED_EXCLUDE_DIRS.iter().copied().collect();
    eprintln!("Excluding directories: {}", fixed.join(", "));

    if !request.exclude.is_empty() {
        let dynamic: Vec<&str> = request.exclude.iter().collect();
        eprintln!("Dynamically excluded items: {}", dynamic.join(", "));
    }
}
