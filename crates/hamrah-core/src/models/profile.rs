//! Profile domain model.
//!
//! One-to-one with [`User`](super::user::User) via the `user_id`
//! back-reference: the profile points at its owning user, never the
//! reverse. Created once at registration and immutable afterwards.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: Uuid,
    /// Back-reference to the owning user.
    pub user_id: Uuid,
    pub name: String,
    /// Unique 10-digit national identifier.
    pub national_id: String,
    /// Birth date normalized to a Gregorian calendar date. Only dates
    /// accepted by the Jalali validator ever reach this field.
    pub birth_date: Option<NaiveDate>,
    pub father_name: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateProfile {
    pub user_id: Uuid,
    pub name: String,
    pub national_id: String,
    pub birth_date: Option<NaiveDate>,
    pub father_name: Option<String>,
    pub address: Option<String>,
}
