//! Line counting for a single file's content.

use crate::config::LineConvention;

/// Number of leading bytes inspected for a NUL when deciding a file is binary.
const BINARY_SNIFF_LEN: usize = 8000;

/// Returns true if the content looks binary (NUL byte near the start).
pub fn is_binary(content: &[u8]) -> bool {
    let end = content.len().min(BINARY_SNIFF_LEN);
    content[..end].contains(&0)
}

/// Count lines in `content` under the given convention.
///
/// `Segments` counts newline-delimited segments: N newlines give N+1
/// segments, so `"a\nb\n"` is 3 and an empty file is 1.
/// `Lines` counts newline-terminated lines plus a final unterminated one:
/// `"a\nb\n"` and `"a\nb"` are both 2 and an empty file is 0.
pub fn count_lines(content: &[u8], convention: LineConvention) -> u64 {
    let newlines = content.iter().filter(|&&b| b == b'\n').count() as u64;
    match convention {
        LineConvention::Segments => newlines + 1,
        LineConvention::Lines => match content.last() {
            None | Some(b'\n') => newlines,
            Some(_) => newlines + 1,
        },
    }
}
