//! Parser for `git diff --numstat -z` output.

use crate::error::{DiffstatError, Result};
use crate::git::{nul_records, path_from_bytes};

use super::ChangeRecord;
use super::helpers::parse_stat;

/// Parse NUL-delimited numstat output into change records.
///
/// Each record is `added\tdeleted\tpath\0`. Renames and copies leave the
/// path column empty and follow it with `old\0new\0`. Paths are taken
/// byte for byte; git does not quote them under `-z`.
///
/// # Returns
///
/// * `Ok(Vec<ChangeRecord>)` - One record per changed file, in git's order
/// * `Err(DiffstatError::ParseError)` - A stat column is neither a number
///   nor `-`, or a record is truncated
pub fn parse_numstat(output: &[u8]) -> Result<Vec<ChangeRecord>> {
    let mut records = Vec::new();
    let mut tokens = nul_records(output);

    while let Some(token) = tokens.next() {
        let mut columns = token.splitn(3, |&b| b == b'\t');
        let (Some(added), Some(deleted), Some(path)) =
            (columns.next(), columns.next(), columns.next())
        else {
            return Err(DiffstatError::ParseError(format!(
                "numstat record: '{}'",
                String::from_utf8_lossy(token)
            )));
        };

        let added = parse_stat(added, "added")?;
        let deleted = parse_stat(deleted, "deleted")?;

        let (old_path, path) = if path.is_empty() {
            match (tokens.next(), tokens.next()) {
                (Some(old), Some(new)) => (path_from_bytes(old), path_from_bytes(new)),
                _ => {
                    return Err(DiffstatError::ParseError(format!(
                        "numstat rename record: '{}' is missing its paths",
                        String::from_utf8_lossy(token)
                    )));
                }
            }
        } else {
            let path = path_from_bytes(path);
            (path.clone(), path)
        };

        records.push(ChangeRecord {
            old_path,
            path,
            added,
            deleted,
        });
    }

    Ok(records)
}
