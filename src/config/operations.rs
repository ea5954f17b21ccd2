//! Config loading and validation.

use super::model::Config;
use super::types::CONFIG_FILE_NAME;
use crate::error::{DiffstatError, Result};
use crate::filter::PathFilter;
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(DiffstatError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            DiffstatError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Locate and load configuration.
    ///
    /// An explicit path must exist. Otherwise `.diffstat.yaml` at the
    /// repository root is used if present, and defaults if not.
    pub fn discover(repo_root: &Path, explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            debug!(path = %path.display(), "loading config");
            return Self::load(path);
        }

        let candidate = repo_root.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            debug!(path = %candidate.display(), "loading config");
            Self::load(candidate)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| DiffstatError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// - `bytes_per_line` must be positive
    /// - every `exclude` entry must be a valid glob
    pub fn validate(&self) -> Result<()> {
        if self.bytes_per_line == 0 {
            return Err(DiffstatError::UserError(
                "config validation failed: bytes_per_line must be greater than 0".to_string(),
            ));
        }

        PathFilter::new(&self.exclude).map_err(|e| {
            DiffstatError::UserError(format!("config validation failed: {}", e))
        })?;

        Ok(())
    }
}
