//! # Slatebook Config
//!
//! Configuration for the Slatebook portal, loaded from environment
//! variables.
//!
//! # Configuration
//!
//! - `SLATEBOOK_DATA_FILE`: path of the persisted document
//!   (default: `slatebook-data.json`)
//! - `SLATEBOOK_ADMIN_PASSWORD_FILE`: path of the admin password override
//!   key (default: `slatebook-admin-password`)
//! - `SLATEBOOK_ALLOW_DEFAULT_ADMIN`: accept the shipped `admin`/`Admin@123`
//!   credential while no override is set (default: `true`; an insecure
//!   default kept for compatibility, disable it outside local use)
//! - `SLATEBOOK_RESEED_ON_CORRUPTION`: replace an unreadable document with
//!   a fresh seed instead of failing (default: `false`)
//!
//! # Example
//!
//! ```ignore
//! use slatebook_config::PortalConfig;
//!
//! let config = PortalConfig::from_env();
//! println!("document lives at {}", config.data_file.display());
//! ```

use std::path::PathBuf;

/// Portal configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortalConfig {
    /// Path of the persisted document (the single storage key).
    pub data_file: PathBuf,

    /// Path of the separate admin password override key.
    pub admin_password_file: PathBuf,

    /// Whether the shipped default admin credential is accepted while no
    /// override exists.
    pub allow_default_admin_login: bool,

    /// Whether an unreadable document is replaced with a fresh seed.
    pub reseed_on_corruption: bool,
}

impl Default for PortalConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("slatebook-data.json"),
            admin_password_file: PathBuf::from("slatebook-admin-password"),
            allow_default_admin_login: true,
            reseed_on_corruption: false,
        }
    }
}

impl PortalConfig {
    /// Load configuration from the environment, falling back to defaults
    /// for anything unset or unparseable.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let config = Self {
            data_file: std::env::var("SLATEBOOK_DATA_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),
            admin_password_file: std::env::var("SLATEBOOK_ADMIN_PASSWORD_FILE")
                .map(PathBuf::from)
                .unwrap_or(defaults.admin_password_file),
            allow_default_admin_login: env_bool(
                "SLATEBOOK_ALLOW_DEFAULT_ADMIN",
                defaults.allow_default_admin_login,
            ),
            reseed_on_corruption: env_bool(
                "SLATEBOOK_RESEED_ON_CORRUPTION",
                defaults.reseed_on_corruption,
            ),
        };

        if config.allow_default_admin_login {
            tracing::warn!("default admin credential is enabled; unsafe outside local use");
        }

        config
    }
}

fn env_bool(name: &str, default: bool) -> bool {
    match std::env::var(name) {
        Ok(value) => match value.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => true,
            "0" | "false" | "no" => false,
            _ => default,
        },
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PortalConfig::default();
        assert_eq!(config.data_file, PathBuf::from("slatebook-data.json"));
        assert!(config.allow_default_admin_login);
        assert!(!config.reseed_on_corruption);
    }

    #[test]
    fn test_env_bool_parses_common_spellings() {
        // Uses a variable name no other test touches to stay parallel-safe.
        unsafe { std::env::set_var("SLATEBOOK_TEST_BOOL", "yes") };
        assert!(env_bool("SLATEBOOK_TEST_BOOL", false));
        unsafe { std::env::set_var("SLATEBOOK_TEST_BOOL", "0") };
        assert!(!env_bool("SLATEBOOK_TEST_BOOL", true));
        unsafe { std::env::set_var("SLATEBOOK_TEST_BOOL", "garbage") };
        assert!(env_bool("SLATEBOOK_TEST_BOOL", true));
        unsafe { std::env::remove_var("SLATEBOOK_TEST_BOOL") };
    }
}
