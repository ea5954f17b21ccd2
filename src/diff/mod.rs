//! Changed-line counting between two revisions.
//!
//! The count comes from `git diff --numstat`:
//! - Files with numeric stats contribute `added + deleted`
//! - Files git reports as `-` (binary content) go through a size-delta
//!   estimate, see [`estimate_change`]
//!
//! A malformed numeric column is a hard error, unlike the `-` marker.

mod estimate;
mod helpers;
mod parser;


pub use estimate::{estimate_change, estimate_from_sizes};
pub use parser::parse_numstat;

use crate::backend::Backend;
use crate::error::Result;
use crate::filter::PathFilter;
use std::path::PathBuf;
use tracing::debug;

/// Default average bytes per line used by the size estimate.
pub const DEFAULT_BYTES_PER_LINE: u64 = 100;

/// One added/deleted column of a numstat record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStat {
    /// Exact number of lines.
    Lines(u64),
    /// Git reported `-`; no line stats exist for this file.
    Unavailable,
}

/// Per-file entry of a diff summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Path on the `from` side. Equal to `path` unless the file was renamed.
    pub old_path: PathBuf,
    /// Path on the `to` side.
    pub path: PathBuf,
    pub added: LineStat,
    pub deleted: LineStat,
}

impl ChangeRecord {
    /// `added + deleted` when both are numeric.
    pub fn exact_lines(&self) -> Option<u64> {
        match (self.added, self.deleted) {
            (LineStat::Lines(a), LineStat::Lines(d)) => Some(a + d),
            _ => None,
        }
    }

    pub fn is_rename(&self) -> bool {
        self.old_path != self.path
    }
}

/// Aggregate of changed lines between two revisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChangeTally {
    /// Sum of exact and estimated changed lines.
    pub total: u64,
    /// Files counted from numeric stats.
    pub exact_files: usize,
    /// Files counted through the size estimate.
    pub estimated_files: usize,
}

/// Options controlling how changes are counted.
#[derive(Debug, Clone)]
pub struct ChangeOptions {
    pub bytes_per_line: u64,
    pub filter: PathFilter,
}

impl Default for ChangeOptions {
    fn default() -> Self {
        Self {
            bytes_per_line: DEFAULT_BYTES_PER_LINE,
            filter: PathFilter::none(),
        }
    }
}

/// Count lines added plus deleted between `from` and `to`.
///
/// # Returns
///
/// * `Ok(ChangeTally)` - Summed changes
/// * `Err(DiffstatError::GitError)` - The diff itself failed
/// * `Err(DiffstatError::ParseError)` - The diff output was malformed
pub fn count_changed_lines<B: Backend + ?Sized>(
    backend: &B,
    from: &str,
    to: &str,
    options: &ChangeOptions,
) -> Result<ChangeTally> {
    let summary = backend.diff_summary(from, to)?;
    let records = parse_numstat(&summary)?;
    let mut tally = ChangeTally::default();

    for record in records {
        if !options.filter.includes(&record.path) || !options.filter.includes(&record.old_path) {
            continue;
        }

        match record.exact_lines() {
            Some(lines) => {
                tally.total += lines;
                tally.exact_files += 1;
            }
            None => {
                tally.total += estimate_change(backend, from, to, &record, options.bytes_per_line);
                tally.estimated_files += 1;
            }
        }
    }

    debug!(
        from,
        to,
        total = tally.total,
        exact = tally.exact_files,
        estimated = tally.estimated_files,
        "counted changed lines"
    );

    Ok(tally)
}
