//! Database-specific error types and conversions.

use hamrah_core::error::HamrahError;

/// Database-layer error type.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SurrealDB error: {0}")]
    Surreal(#[from] surrealdb::Error),

    #[error("duplicate {entity}")]
    Duplicate { entity: &'static str },

    #[error("Migration failed: {0}")]
    Migration(String),

    #[error("Record decode failed: {0}")]
    Decode(String),

    #[error("Record not found: {entity} with id {id}")]
    NotFound { entity: String, id: String },
}

impl From<DbError> for HamrahError {
    fn from(err: DbError) -> Self {
        match err {
            DbError::Duplicate { entity } => HamrahError::AlreadyExists {
                entity: entity.into(),
            },
            DbError::NotFound { entity, id } => HamrahError::NotFound { entity, id },
            other => HamrahError::Database(other.to_string()),
        }
    }
}

/// Classify a raw SurrealDB error from an insert: a unique-index
/// violation becomes [`DbError::Duplicate`] for `entity`, anything
/// else passes through.
pub(crate) fn duplicate_or(err: surrealdb::Error, entity: &'static str) -> DbError {
    // Unique index violations read "Database index `…` already
    // contains …"; there is no structured variant to match on.
    if err.to_string().contains("already contains") {
        DbError::Duplicate { entity }
    } else {
        DbError::Surreal(err)
    }
}
