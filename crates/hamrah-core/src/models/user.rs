//! User domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of a user. The authorization model is deliberately binary:
/// an account either is an administrator or it is not.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserRole {
    #[default]
    User,
    Admin,
}

impl UserRole {
    /// Capability check consumed by the transport layer's admin guard.
    pub fn is_admin(self) -> bool {
        matches!(self, UserRole::Admin)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn parse(s: &str) -> Option<UserRole> {
        match s {
            "user" => Some(UserRole::User),
            "admin" => Some(UserRole::Admin),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub enum UserStatus {
    #[default]
    Active,
    Disabled,
}

impl UserStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Disabled => "disabled",
        }
    }

    pub fn parse(s: &str) -> Option<UserStatus> {
        match s {
            "active" => Some(UserStatus::Active),
            "disabled" => Some(UserStatus::Disabled),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    /// Unique login identifier: 11-digit phone number.
    pub phone: String,
    pub password_hash: String,
    pub role: UserRole,
    /// Hash of the most recently issued refresh token (SHA-256 of the
    /// token, bcrypt over the digest). Overwritten on every login; the
    /// raw token is never stored.
    pub refresh_token_hash: Option<String>,
    pub status: UserStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUser {
    pub phone: String,
    /// Already-hashed password; hashing is the auth layer's concern.
    pub password_hash: String,
    pub role: UserRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_strings() {
        for role in [UserRole::User, UserRole::Admin] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("superuser"), None);
    }

    #[test]
    fn only_admin_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
        assert!(!UserRole::default().is_admin());
    }

    #[test]
    fn status_defaults_to_active() {
        assert_eq!(UserStatus::default(), UserStatus::Active);
        assert_eq!(UserStatus::parse("active"), Some(UserStatus::Active));
        assert_eq!(UserStatus::parse("banned"), None);
    }
}
