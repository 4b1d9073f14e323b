//! Error types for opendict-core.

use thiserror::Error;

/// Result type alias using StorageError.
pub type Result<T> = std::result::Result<T, StorageError>;

/// Errors raised by a persistent storage backend.
///
/// The entry store never surfaces these to its callers; they are logged and
/// the operation falls back to empty state or a dropped write.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage unavailable")]
    Unavailable,

    #[error("storage backend error: {0}")]
    Backend(String),

    #[error("storage lock poisoned")]
    Poisoned,
}
