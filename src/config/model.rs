//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration file contents (`.diffstat.yaml`).
///
/// Every field is optional; unknown fields are ignored. Command-line flags
/// take precedence over values set here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Average bytes per line for estimating binary changes.
    #[serde(default = "default_bytes_per_line")]
    pub bytes_per_line: u64,

    /// Output format.
    #[serde(default)]
    pub format: OutputFormat,

    /// Separator for the `custom` format.
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether text output may use color.
    #[serde(default = "default_true")]
    pub color: bool,

    /// Line counting convention.
    #[serde(default)]
    pub line_convention: LineConvention,

    /// Glob patterns for paths left out of both counts.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bytes_per_line: default_bytes_per_line(),
            format: OutputFormat::default(),
            separator: default_separator(),
            color: default_true(),
            line_convention: LineConvention::default(),
            exclude: Vec::new(),
        }
    }
}
