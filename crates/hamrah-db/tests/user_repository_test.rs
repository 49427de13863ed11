//! Integration tests for the User repository using in-memory SurrealDB.

use hamrah_core::error::HamrahError;
use hamrah_core::models::user::{CreateUser, UserRole, UserStatus};
use hamrah_core::repository::UserRepository;
use hamrah_db::repository::SurrealUserRepository;
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: spin up an in-memory DB and run migrations.
async fn setup() -> Surreal<surrealdb::engine::local::Db> {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    hamrah_db::run_migrations(&db).await.unwrap();
    db
}

fn sample_user(phone: &str) -> CreateUser {
    CreateUser {
        phone: phone.into(),
        password_hash: "$2b$10$placeholderplaceholderplaceplaceholderplacehold".into(),
        role: UserRole::User,
    }
}

#[tokio::test]
async fn insert_and_find_by_phone() {
    let repo = SurrealUserRepository::new(setup().await);

    let user = repo.insert(sample_user("09120000000")).await.unwrap();
    assert_eq!(user.phone, "09120000000");
    assert_eq!(user.role, UserRole::User);
    assert_eq!(user.status, UserStatus::Active);
    assert_eq!(user.refresh_token_hash, None);

    let fetched = repo.find_by_phone("09120000000").await.unwrap().unwrap();
    assert_eq!(fetched.id, user.id);

    let by_id = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(by_id.phone, "09120000000");
}

#[tokio::test]
async fn find_misses_return_none() {
    let repo = SurrealUserRepository::new(setup().await);

    assert!(repo.find_by_phone("09129999999").await.unwrap().is_none());
    assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_phone_is_rejected_by_the_index() {
    let repo = SurrealUserRepository::new(setup().await);

    repo.insert(sample_user("09120000000")).await.unwrap();
    let err = repo.insert(sample_user("09120000000")).await.unwrap_err();

    assert!(
        matches!(err, HamrahError::AlreadyExists { ref entity } if entity == "user"),
        "expected AlreadyExists, got: {err:?}"
    );
}

#[tokio::test]
async fn refresh_hash_overwrite_is_last_writer_wins() {
    let repo = SurrealUserRepository::new(setup().await);
    let user = repo.insert(sample_user("09120000000")).await.unwrap();

    repo.update_refresh_hash(user.id, "hash-one").await.unwrap();
    repo.update_refresh_hash(user.id, "hash-two").await.unwrap();

    let fetched = repo.find_by_id(user.id).await.unwrap().unwrap();
    assert_eq!(fetched.refresh_token_hash.as_deref(), Some("hash-two"));
}

#[tokio::test]
async fn update_refresh_hash_for_missing_user_fails() {
    let repo = SurrealUserRepository::new(setup().await);

    let err = repo
        .update_refresh_hash(Uuid::new_v4(), "hash")
        .await
        .unwrap_err();
    assert!(matches!(err, HamrahError::NotFound { .. }));
}

#[tokio::test]
async fn delete_removes_the_record() {
    let repo = SurrealUserRepository::new(setup().await);
    let user = repo.insert(sample_user("09120000000")).await.unwrap();

    repo.delete(user.id).await.unwrap();
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());

    // The phone becomes reusable once the record is gone.
    repo.insert(sample_user("09120000000")).await.unwrap();
}

#[tokio::test]
async fn list_returns_all_users() {
    let repo = SurrealUserRepository::new(setup().await);

    repo.insert(sample_user("09120000000")).await.unwrap();
    repo.insert(sample_user("09120000001")).await.unwrap();
    repo.insert(sample_user("09120000002")).await.unwrap();

    let users = repo.list().await.unwrap();
    assert_eq!(users.len(), 3);
}
