//! Network loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading railway data.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The file could not be read
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid railway JSON
    #[error("the JSON file is not properly formatted: {0}")]
    Json(#[from] serde_json::Error),

    /// The path does not name a JSON file
    #[error("file provided must be a JSON file: {0}")]
    NotJson(PathBuf),
}
