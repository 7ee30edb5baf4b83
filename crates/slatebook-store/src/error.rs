//! Store error types.

use slatebook_core::StorageError;
use std::fmt;

/// Error type for store operations.
///
/// Lookups that find nothing are not errors; they return `Option::None`.
/// These variants cover the storage layer and the document itself.
#[derive(Debug)]
pub enum StoreError {
    /// The underlying storage adapter failed.
    Storage(StorageError),

    /// No document exists and the corruption policy forbids reseeding.
    /// Usually means `init` was never called, or the document was removed
    /// out from under the store.
    Missing,

    /// The persisted document is present but cannot be deserialized.
    Corrupted(serde_json::Error),

    /// The in-memory document could not be serialized back out.
    Serialize(serde_json::Error),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Missing => write!(f, "No document found; run init first"),
            Self::Corrupted(e) => write!(f, "Persisted document is corrupted: {}", e),
            Self::Serialize(e) => write!(f, "Failed to serialize document: {}", e),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Storage(e) => Some(e),
            Self::Corrupted(e) | Self::Serialize(e) => Some(e),
            Self::Missing => None,
        }
    }
}

impl From<StorageError> for StoreError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}
