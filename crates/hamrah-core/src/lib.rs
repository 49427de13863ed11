//! HAMRAH Core — shared domain models, repository traits, and errors.

pub mod error;
pub mod models;
pub mod repository;

pub use error::{HamrahError, HamrahResult};
