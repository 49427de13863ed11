//! Integration tests for the Profile repository using in-memory
//! SurrealDB.

use chrono::NaiveDate;
use hamrah_core::error::HamrahError;
use hamrah_core::models::profile::CreateProfile;
use hamrah_core::models::user::{CreateUser, UserRole};
use hamrah_core::repository::{ProfileRepository, UserRepository};
use hamrah_db::repository::{SurrealProfileRepository, SurrealUserRepository};
use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use uuid::Uuid;

/// Helper: in-memory DB with migrations, plus one registered user.
async fn setup() -> (
    SurrealUserRepository<surrealdb::engine::local::Db>,
    SurrealProfileRepository<surrealdb::engine::local::Db>,
    Uuid, // user_id
) {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();
    hamrah_db::run_migrations(&db).await.unwrap();

    let user_repo = SurrealUserRepository::new(db.clone());
    let user = user_repo
        .insert(CreateUser {
            phone: "09120000000".into(),
            password_hash: "irrelevant".into(),
            role: UserRole::User,
        })
        .await
        .unwrap();

    (user_repo, SurrealProfileRepository::new(db), user.id)
}

fn sample_profile(user_id: Uuid, national_id: &str) -> CreateProfile {
    CreateProfile {
        user_id,
        name: "Sara Ahmadi".into(),
        national_id: national_id.into(),
        birth_date: NaiveDate::from_ymd_opt(1995, 6, 15),
        father_name: Some("Hossein".into()),
        address: None,
    }
}

#[tokio::test]
async fn insert_and_find_back() {
    let (_, repo, user_id) = setup().await;

    let profile = repo
        .insert(sample_profile(user_id, "1234567890"))
        .await
        .unwrap();
    assert_eq!(profile.user_id, user_id);
    assert_eq!(profile.name, "Sara Ahmadi");
    assert_eq!(profile.father_name.as_deref(), Some("Hossein"));
    assert_eq!(profile.address, None);

    // The stored birth date round-trips as a plain calendar date.
    assert_eq!(profile.birth_date, NaiveDate::from_ymd_opt(1995, 6, 15));

    let by_nid = repo.find_by_national_id("1234567890").await.unwrap().unwrap();
    assert_eq!(by_nid.id, profile.id);

    let by_user = repo.find_by_user(user_id).await.unwrap().unwrap();
    assert_eq!(by_user.id, profile.id);
}

#[tokio::test]
async fn find_misses_return_none() {
    let (_, repo, _) = setup().await;

    assert!(repo.find_by_national_id("0000000000").await.unwrap().is_none());
    assert!(repo.find_by_user(Uuid::new_v4()).await.unwrap().is_none());
}

#[tokio::test]
async fn duplicate_national_id_is_rejected_by_the_index() {
    let (user_repo, repo, user_id) = setup().await;

    repo.insert(sample_profile(user_id, "1234567890"))
        .await
        .unwrap();

    // A different user, same national id.
    let other = user_repo
        .insert(CreateUser {
            phone: "09120000001".into(),
            password_hash: "irrelevant".into(),
            role: UserRole::User,
        })
        .await
        .unwrap();

    let err = repo
        .insert(sample_profile(other.id, "1234567890"))
        .await
        .unwrap_err();
    assert!(
        matches!(err, HamrahError::AlreadyExists { ref entity } if entity == "profile"),
        "expected AlreadyExists, got: {err:?}"
    );
}

#[tokio::test]
async fn one_profile_per_user() {
    let (_, repo, user_id) = setup().await;

    repo.insert(sample_profile(user_id, "1234567890"))
        .await
        .unwrap();

    let err = repo
        .insert(sample_profile(user_id, "0987654321"))
        .await
        .unwrap_err();
    assert!(matches!(err, HamrahError::AlreadyExists { .. }));
}

#[tokio::test]
async fn missing_birth_date_is_allowed() {
    let (_, repo, user_id) = setup().await;

    let profile = repo
        .insert(CreateProfile {
            user_id,
            name: "Omid".into(),
            national_id: "5555555555".into(),
            birth_date: None,
            father_name: None,
            address: None,
        })
        .await
        .unwrap();
    assert_eq!(profile.birth_date, None);
}

#[tokio::test]
async fn bulk_lookup_joins_only_requested_users() {
    let (user_repo, repo, first_user) = setup().await;
    repo.insert(sample_profile(first_user, "1111111111"))
        .await
        .unwrap();

    let second = user_repo
        .insert(CreateUser {
            phone: "09120000001".into(),
            password_hash: "irrelevant".into(),
            role: UserRole::User,
        })
        .await
        .unwrap();
    repo.insert(sample_profile(second.id, "2222222222"))
        .await
        .unwrap();

    let profiles = repo.find_by_users(&[first_user]).await.unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].national_id, "1111111111");

    let both = repo.find_by_users(&[first_user, second.id]).await.unwrap();
    assert_eq!(both.len(), 2);

    assert!(repo.find_by_users(&[]).await.unwrap().is_empty());
}
