//! Error types for the command-line interface.

use std::path::{Path, PathBuf};

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced to the user. Every variant is fatal and maps to a
/// non-zero exit code in `main`.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Content(#[from] site_content::Error),

    #[error(transparent)]
    Posts(#[from] site_posts::Error),

    #[error(transparent)]
    Sitemap(#[from] site_sitemap::Error),

    #[error(transparent)]
    Fs(#[from] site_fs::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("missing input at {path}: {message}")]
    MissingInput { path: PathBuf, message: String },
}

impl CliError {
    pub fn missing_input(path: impl AsRef<Path>, message: impl Into<String>) -> Self {
        Self::MissingInput {
            path: path.as_ref().to_path_buf(),
            message: message.into(),
        }
    }
}
