//! Error types for site-content

/// Result type for site-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synchronizing a managed block
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("no insertion point: none of the anchors matched: {anchors:?}")]
    NoInsertionPoint { anchors: Vec<String> },

    #[error("postcondition violated: expected exactly 1 managed block after synchronization, found {found}")]
    PostconditionViolation { found: usize },
}

impl Error {
    pub fn no_insertion_point(anchors: &[String]) -> Self {
        Self::NoInsertionPoint {
            anchors: anchors.to_vec(),
        }
    }
}
