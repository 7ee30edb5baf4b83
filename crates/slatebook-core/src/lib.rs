//! # Slatebook Core
//!
//! Foundational types for the Slatebook data store.
//!
//! This crate provides the pieces every other Slatebook crate builds on:
//!
//! - [`storage`]: the storage adapter abstraction (read/write one text blob)
//!   with file-backed and in-memory implementations
//! - [`id`]: generation of prefixed, practically-unique record ids
//!
//! # Example
//!
//! ```ignore
//! use slatebook_core::storage::{MemoryStorage, StorageAdapter};
//! use slatebook_core::id::generate_id;
//!
//! let storage = MemoryStorage::new();
//! storage.write("{}")?;
//! assert_eq!(storage.read()?.as_deref(), Some("{}"));
//!
//! let id = generate_id("GAL");
//! assert!(id.starts_with("GAL"));
//! ```

pub mod id;
pub mod storage;

// Re-export commonly used types at crate root
pub use id::generate_id;
pub use storage::{FileStorage, MemoryStorage, StorageAdapter, StorageError};
