//! School settings singleton and its partial-update type.
//!
//! The settings object lives alongside the collections in the document root.
//! Updates are shallow merges: omitted fields keep their current values, and
//! `bankAccount`, when present, replaces the whole nested object. This is
//! the same contract the original admin settings form follows.

use serde::{Deserialize, Serialize};

/// The singleton settings object within the document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub school_name: String,
    pub address: String,
    pub phone: String,
    pub email: String,
    /// Academic session label, e.g. "2024/2025".
    pub current_session: String,
    /// Term label, e.g. "First Term".
    pub current_term: String,
    pub bank_account: BankAccount,
}

/// School fee account details shown to parents.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub bank_name: String,
    pub account_number: String,
    pub account_name: String,
}

/// Partial update applied to the settings singleton via shallow merge.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub school_name: Option<String>,
    pub address: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub current_session: Option<String>,
    pub current_term: Option<String>,
    /// Replaced wholesale when present.
    pub bank_account: Option<BankAccount>,
}

impl SettingsUpdate {
    /// Shallow-merge this update over the current settings in place.
    pub fn apply_to(self, settings: &mut Settings) {
        if let Some(school_name) = self.school_name {
            settings.school_name = school_name;
        }
        if let Some(address) = self.address {
            settings.address = address;
        }
        if let Some(phone) = self.phone {
            settings.phone = phone;
        }
        if let Some(email) = self.email {
            settings.email = email;
        }
        if let Some(current_session) = self.current_session {
            settings.current_session = current_session;
        }
        if let Some(current_term) = self.current_term {
            settings.current_term = current_term;
        }
        if let Some(bank_account) = self.bank_account {
            settings.bank_account = bank_account;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_settings() -> Settings {
        Settings {
            school_name: "Accurate Step International School".to_string(),
            address: "Kabusa, Behind Living Faith Church, Abuja".to_string(),
            phone: "+234 XXX XXX XXXX".to_string(),
            email: "info@accuratestepschool.edu.ng".to_string(),
            current_session: "2024/2025".to_string(),
            current_term: "First Term".to_string(),
            bank_account: BankAccount {
                bank_name: "First Bank of Nigeria".to_string(),
                account_number: "1234567890".to_string(),
                account_name: "Accurate Step International School".to_string(),
            },
        }
    }

    #[test]
    fn test_partial_update_keeps_other_fields() {
        let mut settings = sample_settings();
        SettingsUpdate {
            current_term: Some("Second Term".to_string()),
            ..Default::default()
        }
        .apply_to(&mut settings);

        assert_eq!(settings.current_term, "Second Term");
        assert_eq!(settings.current_session, "2024/2025");
        assert_eq!(settings.school_name, "Accurate Step International School");
        assert_eq!(settings.bank_account.bank_name, "First Bank of Nigeria");
    }

    #[test]
    fn test_bank_account_replaced_wholesale() {
        let mut settings = sample_settings();
        SettingsUpdate {
            bank_account: Some(BankAccount {
                bank_name: "Zenith Bank".to_string(),
                account_number: "0987654321".to_string(),
                account_name: "Accurate Step Intl School".to_string(),
            }),
            ..Default::default()
        }
        .apply_to(&mut settings);

        assert_eq!(settings.bank_account.bank_name, "Zenith Bank");
        assert_eq!(settings.bank_account.account_number, "0987654321");
    }

    #[test]
    fn test_settings_serialize_camel_case() {
        let json = serde_json::to_value(sample_settings()).unwrap();
        assert_eq!(json["schoolName"], "Accurate Step International School");
        assert_eq!(json["bankAccount"]["accountNumber"], "1234567890");
    }
}
