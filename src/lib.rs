//! # Slatebook
//!
//! A client-side school portal data store.
//!
//! All portal state (students, teachers, parents, teaching resources,
//! results, gallery, payments, announcements, and school settings) lives
//! in one serialized document behind a [`Store`]. The persistence mechanism
//! is a pluggable [`StorageAdapter`]; ship a [`FileStorage`] for real use
//! or a [`MemoryStorage`] for tests.
//!
//! # Example
//!
//! ```ignore
//! use slatebook::{FileStorage, PortalConfig, Store};
//!
//! let config = PortalConfig::from_env();
//! let store = Store::open(Box::new(FileStorage::new(config.data_file.clone())))?;
//!
//! for student in store.students()? {
//!     println!("{} ({})", student.name, student.class_name);
//! }
//! ```

pub use slatebook_auth as auth;
pub use slatebook_config as config;
pub use slatebook_models as models;
pub use slatebook_store as store;

// The types nearly every caller needs, at the crate root.
pub use slatebook_auth::{AdminPasswords, AuthError, RegistrationError};
pub use slatebook_config::PortalConfig;
pub use slatebook_core::{FileStorage, MemoryStorage, StorageAdapter, StorageError};
pub use slatebook_models::{Session, Settings, SettingsUpdate, UserRole};
pub use slatebook_store::{CorruptionPolicy, SchoolDocument, Store, StoreError};
