//! SurrealDB repository implementations.

mod profile;
mod user;

pub use profile::SurrealProfileRepository;
pub use user::SurrealUserRepository;
