//! Authentication error types.

use hamrah_core::error::HamrahError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("phone number already registered")]
    DuplicatePhone,

    #[error("national id already registered")]
    DuplicateNationalId,

    #[error("birth date must match YYYY/MM/DD")]
    InvalidDateFormat,

    #[error("birth date does not exist in the Jalali calendar")]
    InvalidDate,

    #[error("user not found")]
    UserNotFound,

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("malformed user id")]
    InvalidUserId,

    #[error("validation failed: {message}")]
    Validation { message: String },

    #[error("token has expired")]
    TokenExpired,

    #[error("invalid token: {0}")]
    TokenInvalid(String),

    #[error("cryptography error: {0}")]
    Crypto(String),

    #[error(transparent)]
    Store(#[from] HamrahError),
}

impl From<AuthError> for HamrahError {
    fn from(err: AuthError) -> Self {
        match err {
            // Collapsed on purpose: callers must not learn whether the
            // phone or the password was wrong. The service logs the
            // distinction before converting.
            AuthError::UserNotFound | AuthError::InvalidCredentials => {
                HamrahError::AuthenticationFailed {
                    reason: "invalid credentials".into(),
                }
            }
            AuthError::TokenExpired | AuthError::TokenInvalid(_) => {
                HamrahError::AuthenticationFailed {
                    reason: err.to_string(),
                }
            }
            AuthError::DuplicatePhone => HamrahError::AlreadyExists {
                entity: "user".into(),
            },
            AuthError::DuplicateNationalId => HamrahError::AlreadyExists {
                entity: "profile".into(),
            },
            AuthError::InvalidDateFormat | AuthError::InvalidDate | AuthError::InvalidUserId => {
                HamrahError::Validation {
                    message: err.to_string(),
                }
            }
            AuthError::Validation { message } => HamrahError::Validation { message },
            AuthError::Crypto(msg) => HamrahError::Crypto(msg),
            AuthError::Store(inner) => inner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_failures_collapse_to_one_reason() {
        let not_found: HamrahError = AuthError::UserNotFound.into();
        let bad_password: HamrahError = AuthError::InvalidCredentials.into();
        assert_eq!(not_found.to_string(), bad_password.to_string());
    }

    #[test]
    fn duplicates_keep_their_entity() {
        let phone: HamrahError = AuthError::DuplicatePhone.into();
        let nid: HamrahError = AuthError::DuplicateNationalId.into();
        assert!(matches!(phone, HamrahError::AlreadyExists { entity } if entity == "user"));
        assert!(matches!(nid, HamrahError::AlreadyExists { entity } if entity == "profile"));
    }
}
