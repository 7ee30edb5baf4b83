//! # Slatebook Auth
//!
//! Login, registration, and password policy for the Slatebook portal.
//!
//! The store itself performs no validation; every uniqueness pre-check,
//! password rule, and credential comparison the portal promises lives in
//! this crate. Successful logins yield a [`slatebook_models::Session`]
//! value the dashboards hold for the lifetime of the tab; the store never
//! sees it.
//!
//! # Modules
//!
//! - [`login`]: student/teacher/parent credential checks
//! - [`register`]: registration flows with uniqueness pre-checks
//! - [`admin`]: the admin credential and its override key
//! - [`password`]: the portal password policy
//! - [`error`]: registration and auth error types

pub mod admin;
pub mod error;
pub mod login;
pub mod password;
pub mod register;

// Re-export commonly used items at crate root
pub use admin::{AdminPasswords, DEFAULT_ADMIN_PASSWORD, DEFAULT_ADMIN_USERNAME};
pub use error::{AuthError, RegistrationError};
pub use login::{login_parent, login_student, login_teacher};
pub use register::{register_parent, register_student, register_teacher};
