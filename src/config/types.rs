//! Configuration types and defaults for diffstat.
//!
//! This module defines enums and default value functions used by the
//! Config struct.

use crate::diff::DEFAULT_BYTES_PER_LINE;
use serde::{Deserialize, Serialize};

/// Name of the config file looked up at the repository root.
pub const CONFIG_FILE_NAME: &str = ".diffstat.yaml";

/// Output format for results and errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human-readable lines, optionally colored (default).
    #[default]
    Text,
    /// A single-line JSON object.
    Json,
    /// Fields joined by a caller-supplied separator.
    Custom,
}

impl OutputFormat {
    /// Parse an output format from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "text" => Some(Self::Text),
            "json" => Some(Self::Json),
            "custom" => Some(Self::Custom),
            _ => None,
        }
    }
}

/// How a file's content is turned into a line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum LineConvention {
    /// Newline-delimited segments: N newlines count as N+1 (default).
    #[default]
    Segments,
    /// Newline-terminated lines plus a final unterminated line.
    Lines,
}

impl LineConvention {
    /// Parse a line convention from a string.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "segments" => Some(Self::Segments),
            "lines" => Some(Self::Lines),
            _ => None,
        }
    }
}

pub(super) fn default_bytes_per_line() -> u64 {
    DEFAULT_BYTES_PER_LINE
}

pub(super) fn default_separator() -> String {
    "\n".to_string()
}

pub(super) fn default_true() -> bool {
    true
}
