//! SurrealDB implementation of [`ProfileRepository`].
//!
//! Birth dates are stored as midnight-UTC datetimes; the domain model
//! only ever sees the calendar date.

use chrono::{DateTime, NaiveTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use hamrah_core::error::HamrahResult;
use hamrah_core::models::profile::{CreateProfile, Profile};
use hamrah_core::repository::ProfileRepository;

use crate::error::{DbError, duplicate_or};

#[derive(Debug, SurrealValue)]
struct ProfileRow {
    user_id: String,
    name: String,
    national_id: String,
    birth_date: Option<DateTime<Utc>>,
    father_name: Option<String>,
    address: Option<String>,
    created_at: DateTime<Utc>,
}

#[derive(Debug, SurrealValue)]
struct ProfileRowWithId {
    record_id: String,
    user_id: String,
    name: String,
    national_id: String,
    birth_date: Option<DateTime<Utc>>,
    father_name: Option<String>,
    address: Option<String>,
    created_at: DateTime<Utc>,
}

impl ProfileRow {
    fn into_profile(self, id: Uuid) -> Result<Profile, DbError> {
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(Profile {
            id,
            user_id,
            name: self.name,
            national_id: self.national_id,
            birth_date: self.birth_date.map(|dt| dt.date_naive()),
            father_name: self.father_name,
            address: self.address,
            created_at: self.created_at,
        })
    }
}

impl ProfileRowWithId {
    fn try_into_profile(self) -> Result<Profile, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        let user_id = Uuid::parse_str(&self.user_id)
            .map_err(|e| DbError::Decode(format!("invalid user UUID: {e}")))?;
        Ok(Profile {
            id,
            user_id,
            name: self.name,
            national_id: self.national_id,
            birth_date: self.birth_date.map(|dt| dt.date_naive()),
            father_name: self.father_name,
            address: self.address,
            created_at: self.created_at,
        })
    }
}

/// SurrealDB implementation of the Profile repository.
#[derive(Clone)]
pub struct SurrealProfileRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealProfileRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> ProfileRepository for SurrealProfileRepository<C> {
    async fn insert(&self, input: CreateProfile) -> HamrahResult<Profile> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let birth_date = input
            .birth_date
            .map(|d| d.and_time(NaiveTime::MIN).and_utc());

        let result = self
            .db
            .query(
                "CREATE type::record('profile', $id) SET \
                 user_id = $user_id, \
                 name = $name, \
                 national_id = $national_id, \
                 birth_date = $birth_date, \
                 father_name = $father_name, \
                 address = $address",
            )
            .bind(("id", id_str.clone()))
            .bind(("user_id", input.user_id.to_string()))
            .bind(("name", input.name))
            .bind(("national_id", input.national_id))
            .bind(("birth_date", birth_date))
            .bind(("father_name", input.father_name))
            .bind(("address", input.address))
            .await
            .map_err(|e| duplicate_or(e, "profile"))?;

        let mut result = result.check().map_err(|e| duplicate_or(e, "profile"))?;

        let rows: Vec<ProfileRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "profile".into(),
            id: id_str,
        })?;

        Ok(row.into_profile(id)?)
    }

    async fn find_by_national_id(&self, national_id: &str) -> HamrahResult<Option<Profile>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM profile \
                 WHERE national_id = $national_id",
            )
            .bind(("national_id", national_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProfileRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_profile()?)),
            None => Ok(None),
        }
    }

    async fn find_by_user(&self, user_id: Uuid) -> HamrahResult<Option<Profile>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM profile \
                 WHERE user_id = $user_id",
            )
            .bind(("user_id", user_id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProfileRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_profile()?)),
            None => Ok(None),
        }
    }

    async fn find_by_users(&self, user_ids: &[Uuid]) -> HamrahResult<Vec<Profile>> {
        if user_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<String> = user_ids.iter().map(|id| id.to_string()).collect();

        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM profile \
                 WHERE user_id IN $user_ids",
            )
            .bind(("user_ids", ids))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<ProfileRowWithId> = result.take(0).map_err(DbError::from)?;
        let profiles = rows
            .into_iter()
            .map(|row| row.try_into_profile())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(profiles)
    }
}
