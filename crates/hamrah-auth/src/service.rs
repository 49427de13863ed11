//! Credential lifecycle orchestration — registration, login, and
//! profile readback.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::Serialize;
use tracing::{debug, info, warn};
use uuid::Uuid;

use hamrah_core::error::HamrahError;
use hamrah_core::models::profile::CreateProfile;
use hamrah_core::models::user::{CreateUser, User, UserRole};
use hamrah_core::repository::{ProfileRepository, UserRepository};

use crate::config::AuthConfig;
use crate::error::AuthError;
use crate::{password, token, validate};

/// Input for the registration flow.
#[derive(Debug, Clone)]
pub struct RegisterInput {
    pub phone: String,
    /// 10-digit national identifier. It doubles as the initial login
    /// password — an inherited domain convention, kept as-is.
    pub national_id: String,
    pub name: String,
    /// Optional Jalali birth date, `YYYY/MM/DD`.
    pub birth_date: Option<String>,
    pub father_name: Option<String>,
    pub address: Option<String>,
}

/// Input for the login flow.
#[derive(Debug, Clone)]
pub struct LoginInput {
    pub phone: String,
    pub national_id: String,
}

/// Successful registration/login result.
///
/// This is the only place the raw refresh token ever leaves the core;
/// the store retains nothing but its hash.
#[derive(Debug)]
pub struct AuthOutput {
    pub user_id: Uuid,
    /// Signed JWT access token.
    pub access_token: String,
    /// Raw refresh token (return to client, not stored).
    pub refresh_token: String,
    /// Access token lifetime in seconds.
    pub expires_in: u64,
}

/// Redacted self view: no password hash, no refresh-token hash.
/// Profile fields are `None` when no profile is linked — a degraded
/// but successful read, not an error.
#[derive(Debug, Clone, Serialize)]
pub struct MeView {
    pub id: String,
    pub phone: String,
    pub role: String,
    pub status: String,
    pub name: Option<String>,
    pub national_id: Option<String>,
    /// Birth date rendered back into Jalali `YYYY/MM/DD`.
    pub birth_date: Option<String>,
    pub father_name: Option<String>,
    pub address: Option<String>,
}

/// Redacted row of the admin user listing.
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: String,
    pub name: Option<String>,
    pub phone: String,
    pub status: String,
}

/// Authentication service.
///
/// Generic over repository implementations so that this crate has no
/// dependency on the database crate.
pub struct AuthService<U: UserRepository, P: ProfileRepository> {
    users: U,
    profiles: P,
    config: AuthConfig,
}

impl<U: UserRepository, P: ProfileRepository> AuthService<U, P> {
    pub fn new(users: U, profiles: P, config: AuthConfig) -> Self {
        Self {
            users,
            profiles,
            config,
        }
    }

    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    /// Register a new subject: create the user and its linked profile,
    /// then issue a token pair.
    pub async fn register(&self, input: RegisterInput) -> Result<AuthOutput, AuthError> {
        validate::validate_phone(&input.phone)?;
        validate::validate_national_id(&input.national_id)?;
        validate::validate_name(&input.name)?;

        // Pre-checks give precise errors; the store's unique indexes
        // remain the authoritative guard under concurrent registration.
        if self.users.find_by_phone(&input.phone).await?.is_some() {
            return Err(AuthError::DuplicatePhone);
        }
        if self
            .profiles
            .find_by_national_id(&input.national_id)
            .await?
            .is_some()
        {
            return Err(AuthError::DuplicateNationalId);
        }

        // Birth-date gate: no unvalidated date ever reaches storage.
        let birth_date = match input.birth_date.as_deref() {
            None => None,
            Some(text) => Some(convert_birth_date(text)?),
        };

        // The national id doubles as the initial password (domain
        // convention; see RegisterInput).
        let password_hash = password::hash_secret(&input.national_id, self.config.bcrypt_cost)?;

        let user = self
            .users
            .insert(CreateUser {
                phone: input.phone,
                password_hash,
                role: UserRole::User,
            })
            .await
            .map_err(|e| match e {
                HamrahError::AlreadyExists { .. } => AuthError::DuplicatePhone,
                other => AuthError::Store(other),
            })?;

        let created = self
            .profiles
            .insert(CreateProfile {
                user_id: user.id,
                name: input.name,
                national_id: input.national_id,
                birth_date,
                father_name: input.father_name,
                address: input.address,
            })
            .await;

        if let Err(e) = created {
            // Registration is all-or-nothing: a user without a profile
            // must not survive, so roll back the insert.
            if let Err(rollback) = self.users.delete(user.id).await {
                warn!(
                    user_id = %user.id,
                    error = %rollback,
                    "failed to roll back user after profile insert error"
                );
            }
            return Err(match e {
                HamrahError::AlreadyExists { .. } => AuthError::DuplicateNationalId,
                other => AuthError::Store(other),
            });
        }

        let (access_token, refresh_token) = self.issue_tokens(&user).await?;
        info!(user_id = %user.id, "user registered");

        Ok(AuthOutput {
            user_id: user.id,
            access_token,
            refresh_token,
            expires_in: self.config.access_token_ttl_secs,
        })
    }

    /// Authenticate by phone + national id and issue a fresh token
    /// pair, superseding any previously issued refresh token.
    pub async fn login(&self, input: LoginInput) -> Result<AuthOutput, AuthError> {
        let Some(user) = self.users.find_by_phone(&input.phone).await? else {
            // Logged distinctly, surfaced generically: the outward
            // conversion folds both failure kinds into one signal.
            debug!(phone = %input.phone, "login attempt for unknown phone");
            return Err(AuthError::UserNotFound);
        };

        if !password::verify_secret(&input.national_id, &user.password_hash)? {
            debug!(user_id = %user.id, "login attempt with wrong password");
            return Err(AuthError::InvalidCredentials);
        }

        let (access_token, refresh_token) = self.issue_tokens(&user).await?;
        info!(user_id = %user.id, "user logged in");

        Ok(AuthOutput {
            user_id: user.id,
            access_token,
            refresh_token,
            expires_in: self.config.access_token_ttl_secs,
        })
    }

    /// Fetch the caller's own redacted record, profile joined via the
    /// back-reference.
    pub async fn get_me(&self, user_id: &str) -> Result<MeView, AuthError> {
        // Reject malformed identifiers instead of letting the lookup
        // silently miss.
        let id = Uuid::parse_str(user_id).map_err(|_| AuthError::InvalidUserId)?;

        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or(AuthError::UserNotFound)?;

        let profile = self.profiles.find_by_user(user.id).await?;
        if profile.is_none() {
            debug!(user_id = %user.id, "user has no linked profile");
        }

        Ok(MeView {
            id: user.id.to_string(),
            phone: user.phone,
            role: user.role.as_str().into(),
            status: user.status.as_str().into(),
            name: profile.as_ref().map(|p| p.name.clone()),
            national_id: profile.as_ref().map(|p| p.national_id.clone()),
            birth_date: profile
                .as_ref()
                .and_then(|p| hamrah_calendar::gregorian_to_jalali(p.birth_date)),
            father_name: profile.as_ref().and_then(|p| p.father_name.clone()),
            address: profile.and_then(|p| p.address),
        })
    }

    /// Redacted listing of all users with their profile names joined
    /// in bulk. Consumed by the admin surface.
    pub async fn list_users(&self) -> Result<Vec<UserSummary>, AuthError> {
        let users = self.users.list().await?;
        let ids: Vec<Uuid> = users.iter().map(|u| u.id).collect();

        let names: HashMap<Uuid, String> = self
            .profiles
            .find_by_users(&ids)
            .await?
            .into_iter()
            .map(|p| (p.user_id, p.name))
            .collect();

        Ok(users
            .into_iter()
            .map(|u| UserSummary {
                id: u.id.to_string(),
                name: names.get(&u.id).cloned(),
                phone: u.phone,
                status: u.status.as_str().into(),
            })
            .collect())
    }

    /// Issue an access + refresh token pair and persist the hash of
    /// the refresh token, overwriting the previous one. The token
    /// hasher covers the full JWT, so rotating really invalidates the
    /// prior token rather than any token sharing its prefix.
    async fn issue_tokens(&self, user: &User) -> Result<(String, String), AuthError> {
        let access = token::issue_token(user, self.config.access_token_ttl_secs, &self.config)?;
        let refresh = token::issue_token(user, self.config.refresh_token_ttl_secs, &self.config)?;

        let refresh_hash = password::hash_token(&refresh, self.config.bcrypt_cost)?;
        self.users.update_refresh_hash(user.id, &refresh_hash).await?;

        Ok((access, refresh))
    }
}

/// Convert a Jalali birth-date string for storage, separating "wrong
/// shape" from "well-shaped but nonexistent date".
fn convert_birth_date(text: &str) -> Result<NaiveDate, AuthError> {
    if !hamrah_calendar::has_date_shape(text) {
        return Err(AuthError::InvalidDateFormat);
    }
    hamrah_calendar::jalali_to_gregorian(text).ok_or(AuthError::InvalidDate)
}
