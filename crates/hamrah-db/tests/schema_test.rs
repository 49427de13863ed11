//! Migration runner tests against in-memory SurrealDB.

use surrealdb::Surreal;
use surrealdb::engine::local::Mem;
use surrealdb_types::SurrealValue;

#[derive(Debug, SurrealValue)]
struct MigrationRow {
    version: u32,
    name: String,
}

#[tokio::test]
async fn migrations_apply_once_and_are_idempotent() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    hamrah_db::run_migrations(&db).await.unwrap();
    // Re-running must be a no-op, not an error.
    hamrah_db::run_migrations(&db).await.unwrap();

    let mut result = db
        .query("SELECT version, name FROM _migration ORDER BY version ASC")
        .await
        .unwrap();
    let rows: Vec<MigrationRow> = result.take(0).unwrap();

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].version, 1);
    assert_eq!(rows[0].name, "initial_schema");
}

#[tokio::test]
async fn schema_v1_applies_cleanly_on_its_own() {
    let db = Surreal::new::<Mem>(()).await.unwrap();
    db.use_ns("test").use_db("test").await.unwrap();

    db.query(hamrah_db::schema_v1())
        .await
        .unwrap()
        .check()
        .unwrap();
}
