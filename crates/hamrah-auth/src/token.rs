//! JWT issuance and verification (HS256, shared secret).
//!
//! Access and refresh tokens are both signed JWTs carrying the same
//! claims; they differ only in lifetime. Payloads are signed, not
//! encrypted — nothing secret goes in the claims.

use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use hamrah_core::models::user::User;

use crate::config::AuthConfig;
use crate::error::AuthError;

/// Claims embedded in every token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Subject — user ID (UUID string).
    pub sub: String,
    /// Phone number the subject registered with.
    pub phone: String,
    /// Role string (`user` or `admin`).
    pub role: String,
    /// Issuer.
    pub iss: String,
    /// Issued-at (Unix timestamp).
    pub iat: i64,
    /// Expiration (Unix timestamp).
    pub exp: i64,
    /// Unique token ID; makes two tokens minted in the same second
    /// distinct.
    pub jti: String,
}

/// Issue a signed HS256 JWT for `user` with the given lifetime.
pub fn issue_token(user: &User, ttl_secs: u64, config: &AuthConfig) -> Result<String, AuthError> {
    let now = Utc::now().timestamp();
    let claims = TokenClaims {
        sub: user.id.to_string(),
        phone: user.phone.clone(),
        role: user.role.as_str().to_string(),
        iss: config.jwt_issuer.clone(),
        iat: now,
        exp: now + ttl_secs as i64,
        jti: Uuid::new_v4().to_string(),
    };

    let key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
    jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &key)
        .map_err(|e| AuthError::Crypto(format!("JWT encode: {e}")))
}

/// Decode and verify a JWT: signature, expiry, issuer.
pub fn decode_token(token: &str, config: &AuthConfig) -> Result<TokenClaims, AuthError> {
    let key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[&config.jwt_issuer]);
    validation.set_required_spec_claims(&["sub", "exp", "iat", "iss"]);

    jsonwebtoken::decode::<TokenClaims>(token, &key, &validation)
        .map(|data| data.claims)
        .map_err(|e| match e.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => AuthError::TokenExpired,
            _ => AuthError::TokenInvalid(e.to_string()),
        })
}

/// Verified JWT claims — a newtype proving the token passed
/// [`validate_token`].
///
/// The transport layer's authentication guard builds its request
/// context from this. Purely stateless, no store lookup.
#[derive(Debug, Clone)]
pub struct ValidatedClaims(pub TokenClaims);

/// Entry point for request-level authentication middleware.
pub fn validate_token(token: &str, config: &AuthConfig) -> Result<ValidatedClaims, AuthError> {
    decode_token(token, config).map(ValidatedClaims)
}
