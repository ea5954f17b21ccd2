//! Error types for the diffstat CLI.
//!
//! Uses thiserror for derive macros. Only failures that prevent computing a
//! result at all are errors; per-file read problems are reported as values.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for diffstat operations.
#[derive(Error, Debug)]
pub enum DiffstatError {
    /// Branches to compare were not supplied.
    #[error("Usage: diffstat <main branch> <feature branch>")]
    Usage,

    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// A branch or commit could not be resolved.
    #[error("unknown revision '{0}'")]
    ReferenceError(String),

    /// The tracked-file listing failed.
    #[error("failed to list tracked files: {0}")]
    EnumerationError(String),

    /// A numeric field in git output did not parse.
    #[error("failed to parse {0}")]
    ParseError(String),

    /// A single file's content or size could not be read.
    ///
    /// Callers degrade this to a skip or a zero size; it never ends a run.
    #[error("failed to read {0}")]
    ReadError(String),

    /// Any other git invocation failed.
    #[error("git operation failed: {0}")]
    GitError(String),
}

impl DiffstatError {
    /// Returns the process exit code for this error.
    ///
    /// Every error is fatal for the run and maps to the same code.
    pub fn exit_code(&self) -> i32 {
        match self {
            DiffstatError::Usage
            | DiffstatError::UserError(_)
            | DiffstatError::ReferenceError(_)
            | DiffstatError::EnumerationError(_)
            | DiffstatError::ParseError(_)
            | DiffstatError::ReadError(_)
            | DiffstatError::GitError(_) => exit_codes::FAILURE,
        }
    }
}

/// Result type alias for diffstat operations.
pub type Result<T> = std::result::Result<T, DiffstatError>;
