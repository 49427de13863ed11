//! Request input validators.
//!
//! Explicit validator functions composed by the service before any
//! write happens; each returns a typed failure. The transport layer
//! may run its own shape checks first, but these are the ones the core
//! trusts.

use crate::error::AuthError;

fn all_ascii_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

/// Phone numbers are exactly 11 digits (e.g. `09120000000`).
pub fn validate_phone(phone: &str) -> Result<(), AuthError> {
    if phone.len() == 11 && all_ascii_digits(phone) {
        Ok(())
    } else {
        Err(AuthError::Validation {
            message: "phone must be exactly 11 digits".into(),
        })
    }
}

/// National identifiers are exactly 10 digits.
pub fn validate_national_id(national_id: &str) -> Result<(), AuthError> {
    if national_id.len() == 10 && all_ascii_digits(national_id) {
        Ok(())
    } else {
        Err(AuthError::Validation {
            message: "national id must be exactly 10 digits".into(),
        })
    }
}

/// Display names must be non-blank.
pub fn validate_name(name: &str) -> Result<(), AuthError> {
    if name.trim().is_empty() {
        Err(AuthError::Validation {
            message: "name must not be empty".into(),
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_must_be_11_digits() {
        assert!(validate_phone("09120000000").is_ok());
        assert!(validate_phone("0912000000").is_err()); // 10 digits
        assert!(validate_phone("091200000000").is_err()); // 12 digits
        assert!(validate_phone("0912000000a").is_err());
        assert!(validate_phone("۰۹۱۲۰۰۰۰۰۰۰").is_err()); // non-ASCII digits
    }

    #[test]
    fn national_id_must_be_10_digits() {
        assert!(validate_national_id("1234567890").is_ok());
        assert!(validate_national_id("123456789").is_err());
        assert!(validate_national_id("12345678901").is_err());
        assert!(validate_national_id("12345x7890").is_err());
    }

    #[test]
    fn name_must_not_be_blank() {
        assert!(validate_name("Sara").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
    }
}
