//! # Slatebook Store
//!
//! The persisted document and the store that owns it.
//!
//! All portal state lives in one serialized document; the [`store::Store`]
//! is its sole owner and every dashboard reads and writes entities only
//! through it. The persistence mechanism is injected as a
//! [`slatebook_core::StorageAdapter`].
//!
//! # Example
//!
//! ```ignore
//! use slatebook_core::MemoryStorage;
//! use slatebook_store::Store;
//!
//! let store = Store::open(Box::new(MemoryStorage::new()))?;
//! let students = store.students()?;
//! ```

pub mod document;
pub mod error;
pub mod store;

// Re-export commonly used types at crate root
pub use document::{SCHEMA_VERSION, SchoolDocument};
pub use error::StoreError;
pub use store::{CorruptionPolicy, Store};
