//! Administrator credentials.
//!
//! The admin is not a record in the document. The portal ships a hardcoded
//! default credential (`admin` / `Admin@123`), an insecure default kept
//! only for compatibility, gated behind a configuration flag so deployments
//! can turn it off. A changed admin password is persisted as a bare string
//! under its own storage key, separate from the document, and takes
//! precedence over the default once set.

use crate::error::AuthError;
use slatebook_core::StorageAdapter;
use slatebook_models::Session;
use tracing::{instrument, warn};

/// The shipped default admin username.
pub const DEFAULT_ADMIN_USERNAME: &str = "admin";

/// The shipped default admin password. Only honored while
/// `allow_default_login` is set.
pub const DEFAULT_ADMIN_PASSWORD: &str = "Admin@123";

/// Owner of the admin password override key.
pub struct AdminPasswords {
    adapter: Box<dyn StorageAdapter>,
    allow_default_login: bool,
}

impl AdminPasswords {
    pub fn new(adapter: Box<dyn StorageAdapter>, allow_default_login: bool) -> Self {
        Self {
            adapter,
            allow_default_login,
        }
    }

    /// The stored override, if the admin password was ever changed.
    pub fn override_password(&self) -> Result<Option<String>, AuthError> {
        Ok(self.adapter.read()?)
    }

    /// Persist a new admin password under the override key.
    #[instrument(skip(self, password))]
    pub fn set_password(&self, password: &str) -> Result<(), AuthError> {
        self.adapter.write(password)?;
        Ok(())
    }

    /// Log the administrator in.
    ///
    /// The override, when present, is the only accepted password. Without
    /// one, the shipped default is accepted only while default login is
    /// allowed.
    #[instrument(skip(self, password))]
    pub fn login(&self, username: &str, password: &str) -> Result<Option<Session>, AuthError> {
        if username != DEFAULT_ADMIN_USERNAME {
            return Ok(None);
        }

        let accepted = match self.override_password()? {
            Some(stored) => stored == password,
            None => {
                if self.allow_default_login && password == DEFAULT_ADMIN_PASSWORD {
                    warn!("admin logged in with the shipped default credential");
                    true
                } else {
                    false
                }
            }
        };

        Ok(accepted.then(Session::admin))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slatebook_core::MemoryStorage;
    use slatebook_models::UserRole;

    fn admin(allow_default: bool) -> AdminPasswords {
        AdminPasswords::new(Box::new(MemoryStorage::new()), allow_default)
    }

    #[test]
    fn test_default_credential_accepted_when_allowed() {
        let admins = admin(true);
        let session = admins.login("admin", "Admin@123").unwrap().unwrap();
        assert_eq!(session.user_type, UserRole::Admin);
    }

    #[test]
    fn test_default_credential_rejected_when_flag_off() {
        let admins = admin(false);
        assert!(admins.login("admin", "Admin@123").unwrap().is_none());
    }

    #[test]
    fn test_override_takes_precedence_over_default() {
        let admins = admin(true);
        admins.set_password("S3cureOne").unwrap();

        assert!(admins.login("admin", "Admin@123").unwrap().is_none());
        assert!(admins.login("admin", "S3cureOne").unwrap().is_some());
    }

    #[test]
    fn test_wrong_username_rejected() {
        let admins = admin(true);
        assert!(admins.login("root", "Admin@123").unwrap().is_none());
    }
}
