//! The fixed name filter applied during the walk.

use crate::error::ArchiveError;
use globset::{GlobBuilder, GlobMatcher};
use std::ffi::OsStr;
use std::sync::OnceLock;

/// Names matching this glob (case-insensitively) never produce a record.
pub const EXCLUDED_GLOB: &str = "*.exe";

/// Matches file names that are skipped entirely.
#[derive(Debug, Clone)]
pub struct ExcludeFilter {
    matcher: GlobMatcher,
}

impl ExcludeFilter {
    /// Builds the `*.exe` filter.
    ///
    /// # Errors
    ///
    /// Returns [`ArchiveError::Pattern`] if the glob fails to compile.
    pub fn new() -> Result<Self, ArchiveError> {
        let glob = GlobBuilder::new(EXCLUDED_GLOB)
            .case_insensitive(true)
            .literal_separator(true)
            .build()
            .map_err(|e| ArchiveError::Pattern {
                pattern: EXCLUDED_GLOB.to_string(),
                reason: e.to_string(),
            })?;
        Ok(Self {
            matcher: glob.compile_matcher(),
        })
    }

    /// True when a file with this bare name (no directory part) is skipped.
    pub fn is_excluded(&self, name: &OsStr) -> bool {
        self.matcher.is_match(name)
    }
}

/// True when a file with this bare name is skipped by the walk.
///
/// Shares one lazily compiled [`ExcludeFilter`]; if it cannot be built,
/// nothing is excluded.
pub fn is_excluded_name(name: &OsStr) -> bool {
    static FILTER: OnceLock<Option<ExcludeFilter>> = OnceLock::new();
    FILTER
        .get_or_init(|| ExcludeFilter::new().ok())
        .as_ref()
        .is_some_and(|filter| filter.is_excluded(name))
}
