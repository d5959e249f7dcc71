//! Scanner module - Tree traversal and filtering
//!
//! Provides:
//! - exclude: fixed and dynamic exclusion rules
//! - patterns: inclusion glob matching
//! - walk: top-down traversal with pruning

pub mod exclude;
pub mod patterns;
pub mod walk;

pub use walk::scan;

use std::path::PathBuf;

use crate::scanner::exclude::ExcludeSet;
use crate::scanner::patterns::PatternSet;

/// Everything a single scan needs
#[derive(Debug, Clone)]
pub struct ScanRequest {
    /// Root directory to scan (canonicalized by the CLI layer)
    pub root: PathBuf,

    /// Compiled inclusion patterns, matched against bare file names
    pub patterns: PatternSet,

    /// User-supplied exclusion tokens
    pub exclude: ExcludeSet,

    /// Suppress the banner and per-file progress lines
    pub quiet: bool,
}
