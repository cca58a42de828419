//! Error types for configuration loading.
//!
//! Drag handling itself never fails: out-of-range and not-yet-measured
//! conditions are clamped or ignored. Only reading a `ListConfig` can error.

use thiserror::Error;

/// Errors that can occur while loading a list configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// A field holds a value the engine cannot work with
    #[error("Invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Result type alias for configuration operations
pub type ConfigResult<T> = Result<T, ConfigError>;
