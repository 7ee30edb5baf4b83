//! Storage adapter abstraction.
//!
//! The entire portal document is persisted as a single text blob under one
//! fixed key. This module provides the trait-based abstraction over "read the
//! blob" / "write the blob" so the store logic stays independent of where the
//! blob actually lives (a file on disk, memory in tests, or some future
//! backend).
//!
//! Reads and writes are synchronous: the store runs in a single-threaded,
//! cooperative execution model with no suspension points inside an operation.
//!
//! # Example
//!
//! ```ignore
//! use slatebook_core::storage::{FileStorage, StorageAdapter};
//! use std::path::PathBuf;
//!
//! let storage = FileStorage::new(PathBuf::from("./data/school.json"));
//!
//! // Missing file reads as None, never as an error
//! assert_eq!(storage.read()?, None);
//!
//! storage.write("{\"students\":[]}")?;
//! assert!(storage.read()?.is_some());
//! ```

use std::fmt;
use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::Mutex;

/// Abstract trait for document storage backends.
///
/// Implementations can be swapped without changing store logic. An adapter
/// owns exactly one key; a second document (e.g. the admin password
/// override) gets its own adapter instance.
pub trait StorageAdapter: Send + Sync {
    /// Read the current contents under this adapter's key.
    ///
    /// Returns `Ok(None)` when nothing has ever been written, which the
    /// store treats as "first use".
    fn read(&self) -> Result<Option<String>, StorageError>;

    /// Replace the contents under this adapter's key.
    ///
    /// Writes are whole-blob: there is no partial update.
    fn write(&self, contents: &str) -> Result<(), StorageError>;
}

/// Error type for storage adapter operations.
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (file system or similar).
    IoError(io::Error),

    /// The backing store is unusable (e.g. a poisoned in-memory lock).
    Unavailable(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IoError(e) => write!(f, "I/O error: {}", e),
            Self::Unavailable(msg) => write!(f, "Storage unavailable: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(e: io::Error) -> Self {
        Self::IoError(e)
    }
}

/// File-backed storage: one document per file path.
///
/// A missing file is reported as `None` rather than an error, so a fresh
/// installation looks identical to an empty browser storage key. Parent
/// directories are created on first write.
#[derive(Debug, Clone)]
pub struct FileStorage {
    path: PathBuf,
}

impl FileStorage {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The file path this adapter reads and writes.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }
}

impl StorageAdapter for FileStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(&self.path, contents)?;
        tracing::debug!(path = %self.path.display(), bytes = contents.len(), "document written");
        Ok(())
    }
}

/// In-memory storage for tests and ephemeral sessions.
///
/// The mutex only guards the interior cell; the store itself assumes a
/// single-threaded caller and provides no cross-context coordination.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    contents: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with pre-existing contents, as if a prior session had written.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Mutex::new(Some(contents.into())),
        }
    }
}

impl StorageAdapter for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StorageError> {
        let guard = self
            .contents
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(guard.clone())
    }

    fn write(&self, contents: &str) -> Result<(), StorageError> {
        let mut guard = self
            .contents
            .lock()
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        *guard = Some(contents.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_starts_empty() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        storage.write("hello").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("hello"));
    }

    #[test]
    fn test_memory_storage_last_write_wins() {
        let storage = MemoryStorage::new();
        storage.write("first").unwrap();
        storage.write("second").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("second"));
    }

    #[test]
    fn test_file_storage_missing_file_reads_none() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("absent.json"));
        assert_eq!(storage.read().unwrap(), None);
    }

    #[test]
    fn test_file_storage_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("school.json"));
        storage.write("{\"students\":[]}").unwrap();
        assert_eq!(
            storage.read().unwrap().as_deref(),
            Some("{\"students\":[]}")
        );
    }

    #[test]
    fn test_file_storage_creates_parent_dirs() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path().join("nested/deeper/school.json"));
        storage.write("{}").unwrap();
        assert_eq!(storage.read().unwrap().as_deref(), Some("{}"));
    }
}
