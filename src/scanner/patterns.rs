//! Inclusion glob patterns
//!
//! Shell-style patterns (e.g. `*.rs`) compiled once and tested against bare
//! file names with logical OR. Matching is case-sensitive.

use globset::{Glob, GlobSet, GlobSetBuilder};

/// A compiled set of inclusion patterns
#[derive(Debug, Clone)]
pub struct PatternSet {
    set: GlobSet,
    raw: Vec<String>,
}

impl PatternSet {
    /// Compile patterns into a single matcher.
    /// The caller rejects an empty list; an invalid glob is an error here.
    pub fn compile(patterns: &[String]) -> Result<Self, globset::Error> {
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            builder.add(Glob::new(pattern)?);
        }

        Ok(Self {
            set: builder.build()?,
            raw: patterns.to_vec(),
        })
    }

    /// Test a bare file name against every pattern
    pub fn matches(&self, file_name: &str) -> bool {
        self.set.is_match(file_name)
    }

    /// The original pattern strings, for the scan banner
    pub fn raw(&self) -> &[String] {
        &self.raw
    }
}
