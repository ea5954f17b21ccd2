//! Exit code constants for the diffstat CLI.
//!
//! - 0: Success (including "no changes")
//! - 1: Any error (bad args, unknown reference, parse failure)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Any failure that prevents computing a result.
pub const FAILURE: i32 = 1;
