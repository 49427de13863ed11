//! Domain models for HAMRAH.
//!
//! Plain data records shared across all crates. Persistence-specific
//! row shapes live in `hamrah-db`.

pub mod profile;
pub mod user;
