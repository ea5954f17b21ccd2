//! Size-based estimate for files git reports without line stats.

use crate::backend::Backend;
use crate::error::DiffstatError;
use std::path::Path;
use tracing::{debug, warn};

use super::ChangeRecord;

/// Estimate changed lines from two byte sizes.
///
/// The estimate is `|to - from| / bytes_per_line`, floored at 1: the file
/// showed up in the diff, so it changed by at least one line.
pub fn estimate_from_sizes(size_from: u64, size_to: u64, bytes_per_line: u64) -> u64 {
    let delta = size_from.abs_diff(size_to);
    (delta / bytes_per_line.max(1)).max(1)
}

/// Estimate changed lines for a record lacking numeric stats.
///
/// Reads `old_path` at `from` and `path` at `to`. A size that cannot be
/// read (the file did not exist on that side) counts as 0 bytes. Never fails.
pub fn estimate_change<B: Backend + ?Sized>(
    backend: &B,
    from: &str,
    to: &str,
    record: &ChangeRecord,
    bytes_per_line: u64,
) -> u64 {
    let size_from = size_or_zero(backend, from, &record.old_path);
    let size_to = size_or_zero(backend, to, &record.path);
    let estimate = estimate_from_sizes(size_from, size_to, bytes_per_line);

    debug!(
        path = %record.path.display(),
        renamed = record.is_rename(),
        size_from,
        size_to,
        estimate,
        "estimated change from size delta"
    );

    estimate
}

fn size_or_zero<B: Backend + ?Sized>(backend: &B, rev: &str, path: &Path) -> u64 {
    match backend.file_size(rev, path) {
        Ok(size) => size,
        Err(DiffstatError::ParseError(msg)) => {
            warn!("treating unparseable size as 0: {}", msg);
            0
        }
        Err(_) => 0,
    }
}
