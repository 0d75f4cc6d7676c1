//! Store error kinds.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced by the JSON document store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("user not found: {0}")]
    UserNotFound(String),

    #[error("post not found: {0}")]
    PostNotFound(String),

    #[error("failed to read database {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to write database {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("database {} is not a valid document: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to encode document: {0}")]
    Encode(#[source] serde_json::Error),

    /// The document could not be loaded at all for the requested operation.
    #[error("database unavailable: {0}")]
    Unavailable(#[source] Box<StoreError>),
}

impl StoreError {
    pub(crate) fn read(path: &Path, source: io::Error) -> Self {
        StoreError::Read {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn write(path: &Path, source: io::Error) -> Self {
        StoreError::Write {
            path: path.to_path_buf(),
            source,
        }
    }

    pub(crate) fn decode(path: &Path, source: serde_json::Error) -> Self {
        StoreError::Decode {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Wrap a load failure as "database unavailable"
    pub(crate) fn unavailable(inner: StoreError) -> Self {
        StoreError::Unavailable(Box::new(inner))
    }

    /// True for a missing user or post key
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::UserNotFound(_) | StoreError::PostNotFound(_))
    }
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
