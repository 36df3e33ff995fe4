//! Error types for site-sitemap

use std::path::PathBuf;

/// Result type for site-sitemap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating a sitemap
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("sitemap XML error: {0}")]
    Xml(String),

    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Fs(#[from] site_fs::Error),
}

impl Error {
    pub fn xml(message: impl std::fmt::Display) -> Self {
        Self::Xml(message.to_string())
    }

    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
