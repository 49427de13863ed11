//! Adaptive secret hashing using bcrypt.
//!
//! One cost policy hashes two kinds of secrets: the login password and
//! the refresh token before it is persisted — a leaked user record
//! therefore never yields a usable refresh token. The cost factor is
//! embedded in the digest, so verification needs no configuration.
//!
//! bcrypt only reads the first 72 bytes of its input. Passwords are
//! short, but refresh tokens are JWTs that exceed that limit and share
//! a long common prefix per user, so [`hash_token`] reduces the token
//! to a SHA-256 digest first and bcrypt hashes the digest.

use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// Hash a short secret with bcrypt at the given cost factor. The
/// digest carries its own salt and cost.
pub fn hash_secret(secret: &str, cost: u32) -> Result<String, AuthError> {
    bcrypt::hash(secret, cost).map_err(|e| AuthError::Crypto(format!("bcrypt hash: {e}")))
}

/// Verify a short secret against a bcrypt digest.
///
/// Returns `Ok(false)` on a plain mismatch and `Err(AuthError::Crypto)`
/// only when the stored digest itself is malformed.
pub fn verify_secret(secret: &str, digest: &str) -> Result<bool, AuthError> {
    bcrypt::verify(secret, digest).map_err(|e| AuthError::Crypto(format!("bcrypt verify: {e}")))
}

/// Hash an arbitrarily long token: SHA-256 first, then bcrypt over the
/// hex digest. Every byte of the token influences the result.
pub fn hash_token(token: &str, cost: u32) -> Result<String, AuthError> {
    hash_secret(&sha256_hex(token), cost)
}

/// Verify a token against a digest produced by [`hash_token`].
pub fn verify_token(token: &str, digest: &str) -> Result<bool, AuthError> {
    verify_secret(&sha256_hex(token), digest)
}

fn sha256_hex(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost; keeps the test suite fast.
    const COST: u32 = 4;

    #[test]
    fn correct_secret_matches() {
        let digest = hash_secret("1234567890", COST).unwrap();
        assert!(verify_secret("1234567890", &digest).unwrap());
    }

    #[test]
    fn wrong_secret_does_not_match() {
        let digest = hash_secret("1234567890", COST).unwrap();
        assert!(!verify_secret("0000000000", &digest).unwrap());
    }

    #[test]
    fn cost_is_embedded_in_digest() {
        let digest = hash_secret("secret", 10).unwrap();
        assert!(digest.contains("$10$"), "cost missing from {digest}");
        // Verification needs no cost parameter.
        assert!(verify_secret("secret", &digest).unwrap());
    }

    #[test]
    fn same_secret_hashes_differently() {
        // Fresh salt per call.
        let a = hash_secret("secret", COST).unwrap();
        let b = hash_secret("secret", COST).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn malformed_digest_is_an_error() {
        assert!(verify_secret("secret", "not-a-digest").is_err());
    }

    #[test]
    fn token_hashing_sees_past_bcrypts_input_limit() {
        // Two tokens that agree on far more than bcrypt's 72-byte
        // window and differ only at the tail, like two JWTs minted for
        // the same user.
        let prefix = "x".repeat(100);
        let t1 = format!("{prefix}.first");
        let t2 = format!("{prefix}.second");

        let digest = hash_token(&t1, COST).unwrap();
        assert!(verify_token(&t1, &digest).unwrap());
        assert!(!verify_token(&t2, &digest).unwrap());
    }

    #[test]
    fn token_and_secret_digests_are_not_interchangeable() {
        let token = "t".repeat(100);
        let digest = hash_token(&token, COST).unwrap();
        // The raw token never matches the digest of its SHA-256 form.
        assert!(!verify_secret(&token, &digest).unwrap());
    }
}
