//! HAMRAH Auth — registration, phone/password login, JWT
//! issuance/verification, and refresh-token rotation.

pub mod config;
pub mod error;
pub mod password;
pub mod service;
pub mod token;
pub mod validate;

pub use config::AuthConfig;
pub use error::AuthError;
pub use service::{AuthOutput, AuthService, LoginInput, MeView, RegisterInput, UserSummary};
pub use token::TokenClaims;
