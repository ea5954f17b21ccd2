//! Helper functions for numstat parsing.

use crate::error::{DiffstatError, Result};

use super::LineStat;

/// Parse one added/deleted column of `git diff --numstat`.
///
/// `-` is git's marker for "no line stats" (binary content) and maps to
/// [`LineStat::Unavailable`]. Anything else must be a non-negative integer.
pub(super) fn parse_stat(field: &[u8], column: &str) -> Result<LineStat> {
    if field == b"-" {
        return Ok(LineStat::Unavailable);
    }
    std::str::from_utf8(field)
        .ok()
        .and_then(|digits| digits.parse().ok())
        .map(LineStat::Lines)
        .ok_or_else(|| {
            DiffstatError::ParseError(format!(
                "{} lines: '{}'",
                column,
                String::from_utf8_lossy(field)
            ))
        })
}
