//! Error types for loading site data and configuration.
//!
//! Only the loading edge can fail. The interaction layer itself never
//! returns errors; callers log these and fall back to defaults or empty data.

use thiserror::Error;

/// Errors that can occur while loading projects or configuration.
#[derive(Error, Debug)]
pub enum SiteError {
    /// I/O error reading a data file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Project data is present but is not a list of records
    #[error("Invalid project store: expected an array, found {found}")]
    InvalidStore {
        /// JSON type that was found instead
        found: String,
    },

    /// Configuration file written for a different format version
    #[error("Config version mismatch: expected {expected}, found {found}")]
    VersionMismatch {
        /// Version this build understands
        expected: u32,
        /// Version found in the file
        found: u32,
    },

    /// Failure reported by the browser
    #[error("Browser error: {0}")]
    Js(String),
}

impl SiteError {
    /// Create an invalid store error naming the JSON type that was found.
    pub fn invalid_store(value: &serde_json::Value) -> Self {
        let found = match value {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "a boolean",
            serde_json::Value::Number(_) => "a number",
            serde_json::Value::String(_) => "a string",
            serde_json::Value::Array(_) => "an array",
            serde_json::Value::Object(_) => "an object",
        };
        Self::InvalidStore {
            found: found.to_string(),
        }
    }

    /// Create a browser error from anything printable.
    pub fn js(message: impl Into<String>) -> Self {
        Self::Js(message.into())
    }
}
