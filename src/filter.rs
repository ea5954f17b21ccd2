//! Exclude-pattern matching for repo-relative paths.

use crate::error::{DiffstatError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

/// A set of glob patterns; matching paths are left out of every count.
#[derive(Debug, Clone)]
pub struct PathFilter {
    excludes: GlobSet,
    is_empty: bool,
}

impl PathFilter {
    /// Build a filter from glob patterns. Blank patterns are ignored.
    pub fn new(patterns: &[String]) -> Result<Self> {
        let mut builder = GlobSetBuilder::new();
        let mut count = 0;

        for pattern in patterns {
            let normalized = pattern.trim().replace('\\', "/");
            if normalized.is_empty() {
                continue;
            }
            let glob = Glob::new(&normalized).map_err(|e| {
                DiffstatError::UserError(format!("invalid exclude pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
            count += 1;
        }

        let excludes = builder
            .build()
            .map_err(|e| DiffstatError::UserError(format!("invalid exclude patterns: {}", e)))?;

        Ok(Self {
            excludes,
            is_empty: count == 0,
        })
    }

    /// A filter that excludes nothing.
    pub fn none() -> Self {
        Self {
            excludes: GlobSet::empty(),
            is_empty: true,
        }
    }

    /// Returns true if `path` should be counted.
    pub fn includes(&self, path: impl AsRef<Path>) -> bool {
        self.is_empty || !self.excludes.is_match(path)
    }
}

impl Default for PathFilter {
    fn default() -> Self {
        Self::none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_filter_includes_everything() {
        let filter = PathFilter::none();
        assert!(filter.includes("Cargo.lock"));
        assert!(filter.includes("src/main.rs"));
    }

    #[test]
    fn excludes_matching_paths() {
        let filter =
            PathFilter::new(&["*.lock".to_string(), "vendor/**".to_string()]).unwrap();
        assert!(!filter.includes("Cargo.lock"));
        assert!(!filter.includes("vendor/dep/lib.rs"));
        assert!(filter.includes("src/lib.rs"));
    }

    #[test]
    fn blank_patterns_are_ignored() {
        let filter = PathFilter::new(&["  ".to_string()]).unwrap();
        assert!(filter.includes("anything"));
    }

    #[test]
    fn invalid_pattern_is_user_error() {
        let err = PathFilter::new(&["src/[".to_string()]).unwrap_err();
        assert!(matches!(err, DiffstatError::UserError(_)));
        assert!(err.to_string().contains("src/["));
    }
}
