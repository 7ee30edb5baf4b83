//! Portal password policy.
//!
//! Applies to teacher registration and to password changes. Student
//! passwords are exempt: they default to the admission number and the
//! original portal never gates changing them on this policy.

/// Minimum acceptable password length.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Whether a password satisfies the portal policy: at least one uppercase
/// letter, one lowercase letter, and one digit, with a minimum length.
pub fn meets_policy(password: &str) -> bool {
    let has_upper = password.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
    let has_digit = password.chars().any(|c| c.is_ascii_digit());

    has_upper && has_lower && has_digit && password.len() >= MIN_PASSWORD_LEN
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_mixed_case_with_digit() {
        assert!(meets_policy("Passw0rd"));
        assert!(meets_policy("Teacher@123"));
    }

    #[test]
    fn test_rejects_missing_character_classes() {
        assert!(!meets_policy("password1")); // no uppercase
        assert!(!meets_policy("PASSWORD1")); // no lowercase
        assert!(!meets_policy("Password")); // no digit
    }

    #[test]
    fn test_rejects_too_short() {
        assert!(!meets_policy("Pw1"));
    }
}
