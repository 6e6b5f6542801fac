//! Engine configuration.
//!
//! Options are read from an optional JSON file and then overridden by
//! command-line flags. Every field has a default, so an empty object (or no
//! file at all) gives the plain stdin-to-stdout behavior.
//!
//! ```json
//! { "parse_mode": "strict", "trace": true, "message": "hello" }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::protocol::notation::ParseMode;

/// Errors that can occur while loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse configuration JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Engine options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// How unreadable legal-action lines are handled.
    pub parse_mode: ParseMode,
    /// Write one JSON trace record per turn to stderr.
    pub trace: bool,
    /// Text appended to every output line.
    pub message: Option<String>,
}

/// Loads a configuration from a JSON file at the given path.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let data = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    config_from_str(&data)
}

/// Loads a configuration from a JSON string.
pub fn config_from_str(json: &str) -> Result<EngineConfig, ConfigError> {
    Ok(serde_json::from_str(json)?)
}
