//! Auth error types.

use slatebook_core::StorageError;
use slatebook_store::StoreError;
use std::fmt;
use validator::ValidationErrors;

/// Error type for registration flows.
///
/// These are the validation failures the store deliberately does not
/// perform: uniqueness pre-checks, password policy, and child resolution
/// all happen here, before anything is appended.
#[derive(Debug)]
pub enum RegistrationError {
    /// A student with this admission number already exists.
    DuplicateAdmissionNumber(String),

    /// A teacher with this email (compared case-insensitively) already
    /// exists.
    DuplicateEmail(String),

    /// The password fails the portal policy.
    WeakPassword,

    /// No student carries the admission number a parent is being linked to.
    UnknownAdmissionNumber(String),

    /// Field-level validation failed.
    Invalid(ValidationErrors),

    /// The store itself failed.
    Store(StoreError),
}

impl fmt::Display for RegistrationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateAdmissionNumber(n) => {
                write!(f, "Admission number {} is already registered", n)
            }
            Self::DuplicateEmail(e) => write!(f, "Email {} is already registered", e),
            Self::WeakPassword => write!(
                f,
                "Password must contain uppercase, lowercase letters and numbers (min 6 characters)"
            ),
            Self::UnknownAdmissionNumber(n) => {
                write!(f, "No student found with admission number {}", n)
            }
            Self::Invalid(e) => write!(f, "Validation failed: {}", e),
            Self::Store(e) => write!(f, "Store error: {}", e),
        }
    }
}

impl std::error::Error for RegistrationError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Invalid(e) => Some(e),
            Self::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for RegistrationError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<ValidationErrors> for RegistrationError {
    fn from(e: ValidationErrors) -> Self {
        Self::Invalid(e)
    }
}

/// Error type for login flows.
///
/// A wrong credential is not an error: logins return `Ok(None)` and the
/// dashboard decides the user-facing message. These variants cover the
/// backing storage only.
#[derive(Debug)]
pub enum AuthError {
    Store(StoreError),
    Storage(StorageError),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "Store error: {}", e),
            Self::Storage(e) => write!(f, "Storage error: {}", e),
        }
    }
}

impl std::error::Error for AuthError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Storage(e) => Some(e),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<StorageError> for AuthError {
    fn from(e: StorageError) -> Self {
        Self::Storage(e)
    }
}
