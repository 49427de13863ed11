//! HAMRAH Database — SurrealDB connection management, schema
//! migrations, and repository implementations.
//!
//! The uniqueness invariants (one user per phone, one profile per
//! national id, one profile per user) are enforced here with unique
//! indexes, so concurrent registrations cannot both succeed; the
//! violating write surfaces as `AlreadyExists` to the orchestrator.

mod connection;
mod error;
pub mod repository;
mod schema;

pub use connection::{DbConfig, DbManager};
pub use error::DbError;
pub use schema::{run_migrations, schema_v1};
