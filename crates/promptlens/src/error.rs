//! Error types for the PromptLens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for PromptLens operations.
#[derive(Debug, Error)]
pub enum PromptLensError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Regex compilation error.
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Catalog or rule-table configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for PromptLens operations.
pub type Result<T> = std::result::Result<T, PromptLensError>;
