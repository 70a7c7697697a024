use mspsource::{SearchQuery, SourceError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueueError>;

#[derive(Error, Debug)]
pub enum QueueError {
    /// An enqueue admitted no record at all.
    #[error("No playable item found for {0}")]
    EmptyResult(String),
    #[error("Position {position} is out of range (queue has {len} items)")]
    InvalidPosition { position: usize, len: usize },
    #[error("Unknown play mode: {0}")]
    UnknownPlayMode(String),
    #[error("Unknown explicit filter: {0}")]
    UnknownFilter(String),
    #[error("Snapshot serialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
    /// Adapter failure passed through with its original kind.
    #[error(transparent)]
    Source(#[from] SourceError),
}

impl QueueError {
    pub fn empty_result(query: &SearchQuery) -> Self {
        QueueError::EmptyResult(query.to_string())
    }

    pub fn is_empty_result(&self) -> bool {
        matches!(self, QueueError::EmptyResult(_))
    }

    pub fn is_auth_error(&self) -> bool {
        matches!(self, QueueError::Source(e) if e.is_auth_error())
    }

    pub fn is_subscription_error(&self) -> bool {
        matches!(self, QueueError::Source(e) if e.is_subscription_error())
    }

    /// The adapter error behind this one, if any.
    pub fn source_error(&self) -> Option<&SourceError> {
        match self {
            QueueError::Source(e) => Some(e),
            _ => None,
        }
    }
}
