//! Error types for site-posts

use std::path::PathBuf;

/// Result type for site-posts operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while indexing posts
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A required input is absent or unparsable.
    #[error("missing input at {path}: {message}")]
    MissingInput { path: PathBuf, message: String },

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Fs(#[from] site_fs::Error),
}

impl Error {
    pub fn missing_input(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::MissingInput {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
