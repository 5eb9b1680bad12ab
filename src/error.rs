// src/error.rs
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FeedError {
    #[error("video not found: {id}")]
    VideoNotFound { id: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {source} (path: {path})")]
    Io {
        source: std::io::Error,
        path: PathBuf,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, FeedError>;

impl FeedError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        FeedError::InvalidInput(msg.into())
    }

    /// Returns true for the recoverable "unknown video" outcome.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, FeedError::VideoNotFound { .. })
    }
}

// Allow `?` on std::io::Error by converting to FeedError::Io with unknown path.
impl From<std::io::Error> for FeedError {
    fn from(source: std::io::Error) -> Self {
        FeedError::Io {
            source,
            path: PathBuf::from("<unknown>"),
        }
    }
}
