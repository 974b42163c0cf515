//! Storage-layer errors.

use std::path::PathBuf;

/// Failure reading or writing a key-value store.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// Underlying file I/O failed.
    #[error("storage I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be encoded for writing.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[from] serde_json::Error),

    /// The backing store exists but its contents cannot be read as a store.
    #[error("store {path} is corrupt: {reason}")]
    Corrupt { path: PathBuf, reason: String },
}

impl StorageError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
