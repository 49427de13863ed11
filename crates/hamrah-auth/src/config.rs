//! Authentication configuration.
//!
//! Loaded once at startup and injected into the service; nothing in
//! the core reads the environment per call.

/// Default access token lifetime: 15 minutes.
pub const DEFAULT_ACCESS_TTL_SECS: u64 = 900;
/// Default refresh token lifetime: 7 days.
pub const DEFAULT_REFRESH_TTL_SECS: u64 = 604_800;
/// Default bcrypt work factor.
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Configuration for the authentication service.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Shared HMAC secret for JWT signing (HS256).
    pub jwt_secret: String,
    /// JWT issuer (`iss` claim).
    pub jwt_issuer: String,
    /// Access token lifetime in seconds.
    pub access_token_ttl_secs: u64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_ttl_secs: u64,
    /// bcrypt cost factor used for passwords and refresh-token hashes.
    pub bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "default_secret".into(),
            jwt_issuer: "hamrah".into(),
            access_token_ttl_secs: DEFAULT_ACCESS_TTL_SECS,
            refresh_token_ttl_secs: DEFAULT_REFRESH_TTL_SECS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    /// Build the configuration from process environment variables,
    /// falling back to defaults for anything absent or unparseable.
    ///
    /// `JWT_ACCESS_EXPIRES` and `JWT_REFRESH_EXPIRES` accept duration
    /// expressions (`15m`, `7d`, bare seconds) per [`parse_expires`].
    pub fn from_env() -> Self {
        let access = std::env::var("JWT_ACCESS_EXPIRES").ok();
        let refresh = std::env::var("JWT_REFRESH_EXPIRES").ok();
        Self {
            jwt_secret: std::env::var("JWT_SECRET").unwrap_or_else(|_| "default_secret".into()),
            jwt_issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "hamrah".into()),
            access_token_ttl_secs: parse_expires(access.as_deref(), DEFAULT_ACCESS_TTL_SECS),
            refresh_token_ttl_secs: parse_expires(refresh.as_deref(), DEFAULT_REFRESH_TTL_SECS),
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_BCRYPT_COST),
        }
    }
}

/// Resolve a duration expression to seconds.
///
/// Accepts digits followed by one of `s`, `m`, `h`, `d`, or bare
/// digits treated as already-seconds. Absent or unparseable input
/// silently resolves to `default_secs`; this function never fails.
pub fn parse_expires(expr: Option<&str>, default_secs: u64) -> u64 {
    let Some(expr) = expr else {
        return default_secs;
    };
    let expr = expr.trim();
    if let Ok(n) = expr.parse::<u64>() {
        return n;
    }
    let Some(unit) = expr.chars().last() else {
        return default_secs;
    };
    let Ok(n) = expr[..expr.len() - unit.len_utf8()].parse::<u64>() else {
        return default_secs;
    };
    match unit {
        's' => n,
        'm' => n * 60,
        'h' => n * 3_600,
        'd' => n * 86_400,
        _ => default_secs,
    }
}
