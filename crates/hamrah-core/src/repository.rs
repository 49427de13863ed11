//! Repository trait definitions for data access abstraction.
//!
//! All repository operations are async. Lookups return `Option` so the
//! orchestrator decides how a miss is reported; inserts rely on the
//! store's unique indexes, which surface collisions as
//! [`HamrahError::AlreadyExists`](crate::error::HamrahError) even under
//! concurrent writers.

use uuid::Uuid;

use crate::error::HamrahResult;
use crate::models::profile::{CreateProfile, Profile};
use crate::models::user::{CreateUser, User};

pub trait UserRepository: Send + Sync {
    /// Insert a new user. A phone collision is an `AlreadyExists` error
    /// raised by the store's unique index, not by a preceding read.
    fn insert(&self, input: CreateUser) -> impl Future<Output = HamrahResult<User>> + Send;

    fn find_by_phone(&self, phone: &str)
    -> impl Future<Output = HamrahResult<Option<User>>> + Send;

    fn find_by_id(&self, id: Uuid) -> impl Future<Output = HamrahResult<Option<User>>> + Send;

    /// Overwrite the stored refresh-token hash. Last writer wins:
    /// concurrent logins race harmlessly and only the most recent
    /// refresh token stays valid.
    fn update_refresh_hash(
        &self,
        id: Uuid,
        refresh_token_hash: &str,
    ) -> impl Future<Output = HamrahResult<()>> + Send;

    /// Hard-delete a user record. Only used to compensate a failed
    /// registration so no user without a profile survives.
    fn delete(&self, id: Uuid) -> impl Future<Output = HamrahResult<()>> + Send;

    fn list(&self) -> impl Future<Output = HamrahResult<Vec<User>>> + Send;
}

pub trait ProfileRepository: Send + Sync {
    /// Insert a new profile. A national-id collision surfaces as
    /// `AlreadyExists` from the store's unique index.
    fn insert(&self, input: CreateProfile) -> impl Future<Output = HamrahResult<Profile>> + Send;

    fn find_by_national_id(
        &self,
        national_id: &str,
    ) -> impl Future<Output = HamrahResult<Option<Profile>>> + Send;

    /// Resolve the profile owned by a user via the back-reference.
    fn find_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = HamrahResult<Option<Profile>>> + Send;

    /// Bulk variant of [`find_by_user`](Self::find_by_user) for joining
    /// profiles onto a user listing.
    fn find_by_users(
        &self,
        user_ids: &[Uuid],
    ) -> impl Future<Output = HamrahResult<Vec<Profile>>> + Send;
}
