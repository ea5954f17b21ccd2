//! Total line counting at a revision.
//!
//! Every tracked file at the revision is read and its lines summed. Files
//! that cannot be read, or that look binary, are skipped and contribute 0;
//! the skip is recorded in the returned [`LineTally`] rather than dropped.

mod lines;


pub use lines::{count_lines, is_binary};

use crate::backend::{Backend, Revision};
use crate::config::LineConvention;
use crate::error::Result;
use crate::filter::PathFilter;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Why a file contributed nothing to the total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Content could not be retrieved.
    Unreadable,
    /// Content contains NUL bytes.
    Binary,
}

/// Outcome of counting one file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileCount {
    Counted(u64),
    Skipped(SkipReason),
}

/// A file that was listed but not counted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: SkipReason,
}

/// Aggregate of a line count over a revision.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTally {
    /// Sum of line counts across counted files.
    pub total: u64,
    /// Number of files that contributed to `total`.
    pub files_counted: usize,
    /// Files that were listed but skipped.
    pub skipped: Vec<SkippedFile>,
}

impl LineTally {
    fn record(&mut self, path: &Path, count: FileCount) {
        match count {
            FileCount::Counted(n) => {
                self.total += n;
                self.files_counted += 1;
            }
            FileCount::Skipped(reason) => self.skipped.push(SkippedFile {
                path: path.to_path_buf(),
                reason,
            }),
        }
    }
}

/// Options controlling how lines are counted.
#[derive(Debug, Clone, Default)]
pub struct CountOptions {
    pub convention: LineConvention,
    pub filter: PathFilter,
}

/// Count one file at a revision.
pub fn count_file<B: Backend + ?Sized>(
    backend: &B,
    rev: &Revision,
    path: &Path,
    convention: LineConvention,
) -> FileCount {
    match backend.read_file(rev, path) {
        Ok(content) if is_binary(&content) => FileCount::Skipped(SkipReason::Binary),
        Ok(content) => FileCount::Counted(count_lines(&content, convention)),
        Err(e) => {
            debug!(path = %path.display(), error = %e, "skipping unreadable file");
            FileCount::Skipped(SkipReason::Unreadable)
        }
    }
}

/// Sum line counts over every tracked file at `rev`.
///
/// # Returns
///
/// * `Ok(LineTally)` - Total plus per-file skip information
/// * `Err(DiffstatError::EnumerationError)` - The file listing failed
pub fn count_total_lines<B: Backend + ?Sized>(
    backend: &B,
    rev: &Revision,
    options: &CountOptions,
) -> Result<LineTally> {
    let files = backend.list_files(rev)?;
    let mut tally = LineTally::default();

    for path in files.iter().filter(|p| options.filter.includes(p)) {
        tally.record(path, count_file(backend, rev, path, options.convention));
    }

    debug!(
        revision = %rev,
        total = tally.total,
        counted = tally.files_counted,
        skipped = tally.skipped.len(),
        "counted lines"
    );

    Ok(tally)
}
