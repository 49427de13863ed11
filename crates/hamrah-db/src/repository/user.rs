//! SurrealDB implementation of [`UserRepository`].

use chrono::{DateTime, Utc};
use surrealdb::{Connection, Surreal};
use surrealdb_types::SurrealValue;
use uuid::Uuid;

use hamrah_core::error::HamrahResult;
use hamrah_core::models::user::{CreateUser, User, UserRole, UserStatus};
use hamrah_core::repository::UserRepository;

use crate::error::{DbError, duplicate_or};

/// DB-side row struct for queries where the UUID is already known.
#[derive(Debug, SurrealValue)]
struct UserRow {
    phone: String,
    password_hash: String,
    role: String,
    refresh_token_hash: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// DB-side row struct that includes the record ID via `meta::id(id)`.
#[derive(Debug, SurrealValue)]
struct UserRowWithId {
    record_id: String,
    phone: String,
    password_hash: String,
    role: String,
    refresh_token_hash: Option<String>,
    status: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

fn parse_role(s: &str) -> Result<UserRole, DbError> {
    UserRole::parse(s).ok_or_else(|| DbError::Decode(format!("unknown user role: {s}")))
}

fn parse_status(s: &str) -> Result<UserStatus, DbError> {
    UserStatus::parse(s).ok_or_else(|| DbError::Decode(format!("unknown user status: {s}")))
}

impl UserRow {
    fn into_user(self, id: Uuid) -> Result<User, DbError> {
        Ok(User {
            id,
            phone: self.phone,
            password_hash: self.password_hash,
            role: parse_role(&self.role)?,
            refresh_token_hash: self.refresh_token_hash,
            status: parse_status(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

impl UserRowWithId {
    fn try_into_user(self) -> Result<User, DbError> {
        let id = Uuid::parse_str(&self.record_id)
            .map_err(|e| DbError::Decode(format!("invalid UUID: {e}")))?;
        Ok(User {
            id,
            phone: self.phone,
            password_hash: self.password_hash,
            role: parse_role(&self.role)?,
            refresh_token_hash: self.refresh_token_hash,
            status: parse_status(&self.status)?,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// SurrealDB implementation of the User repository.
#[derive(Clone)]
pub struct SurrealUserRepository<C: Connection> {
    db: Surreal<C>,
}

impl<C: Connection> SurrealUserRepository<C> {
    pub fn new(db: Surreal<C>) -> Self {
        Self { db }
    }
}

impl<C: Connection> UserRepository for SurrealUserRepository<C> {
    async fn insert(&self, input: CreateUser) -> HamrahResult<User> {
        let id = Uuid::new_v4();
        let id_str = id.to_string();

        let result = self
            .db
            .query(
                "CREATE type::record('user', $id) SET \
                 phone = $phone, \
                 password_hash = $password_hash, \
                 role = $role, \
                 refresh_token_hash = NONE, \
                 status = $status",
            )
            .bind(("id", id_str.clone()))
            .bind(("phone", input.phone))
            .bind(("password_hash", input.password_hash))
            .bind(("role", input.role.as_str().to_string()))
            .bind(("status", UserStatus::Active.as_str().to_string()))
            .await
            .map_err(|e| duplicate_or(e, "user"))?;

        // The unique phone index rejects at statement level, so the
        // violation surfaces from check() rather than the send.
        let mut result = result.check().map_err(|e| duplicate_or(e, "user"))?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        let row = rows.into_iter().next().ok_or_else(|| DbError::NotFound {
            entity: "user".into(),
            id: id_str,
        })?;

        Ok(row.into_user(id)?)
    }

    async fn find_by_phone(&self, phone: &str) -> HamrahResult<Option<User>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 WHERE phone = $phone",
            )
            .bind(("phone", phone.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.try_into_user()?)),
            None => Ok(None),
        }
    }

    async fn find_by_id(&self, id: Uuid) -> HamrahResult<Option<User>> {
        let mut result = self
            .db
            .query("SELECT * FROM type::record('user', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        match rows.into_iter().next() {
            Some(row) => Ok(Some(row.into_user(id)?)),
            None => Ok(None),
        }
    }

    async fn update_refresh_hash(&self, id: Uuid, refresh_token_hash: &str) -> HamrahResult<()> {
        let id_str = id.to_string();

        let mut result = self
            .db
            .query(
                "UPDATE type::record('user', $id) SET \
                 refresh_token_hash = $hash, updated_at = time::now()",
            )
            .bind(("id", id_str.clone()))
            .bind(("hash", refresh_token_hash.to_string()))
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRow> = result.take(0).map_err(DbError::from)?;
        if rows.is_empty() {
            return Err(DbError::NotFound {
                entity: "user".into(),
                id: id_str,
            }
            .into());
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> HamrahResult<()> {
        // Hard delete: only reached when compensating a failed
        // registration, never as a user-facing operation.
        self.db
            .query("DELETE type::record('user', $id)")
            .bind(("id", id.to_string()))
            .await
            .map_err(DbError::from)?
            .check()
            .map_err(DbError::from)?;

        Ok(())
    }

    async fn list(&self) -> HamrahResult<Vec<User>> {
        let mut result = self
            .db
            .query(
                "SELECT meta::id(id) AS record_id, * FROM user \
                 ORDER BY created_at ASC",
            )
            .await
            .map_err(DbError::from)?;

        let rows: Vec<UserRowWithId> = result.take(0).map_err(DbError::from)?;
        let users = rows
            .into_iter()
            .map(|row| row.try_into_user())
            .collect::<Result<Vec<_>, DbError>>()?;

        Ok(users)
    }
}
