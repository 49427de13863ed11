//! SurrealDB connection setup.

use surrealdb::Surreal;
use surrealdb::engine::remote::ws::{Client, Ws};
use surrealdb::opt::auth::Root;
use tracing::info;

fn env_or(key: &str, fallback: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| fallback.into())
}

/// Connection settings, sourced from `SURREAL_*` environment variables
/// with local-development fallbacks.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// WebSocket address, host:port.
    pub url: String,
    pub namespace: String,
    pub database: String,
    pub username: String,
    pub password: String,
}

impl DbConfig {
    pub fn from_env() -> Self {
        Self {
            url: env_or("SURREAL_URL", "127.0.0.1:8000"),
            namespace: env_or("SURREAL_NAMESPACE", "hamrah"),
            database: env_or("SURREAL_DATABASE", "main"),
            username: env_or("SURREAL_USERNAME", "root"),
            password: env_or("SURREAL_PASSWORD", "root"),
        }
    }
}

/// Holds the authenticated SurrealDB client the repositories share.
#[derive(Clone)]
pub struct DbManager {
    db: Surreal<Client>,
}

impl DbManager {
    /// Open the WebSocket connection, sign in as root, and select the
    /// configured namespace and database.
    pub async fn connect(config: &DbConfig) -> Result<Self, surrealdb::Error> {
        let db = Surreal::new::<Ws>(&config.url).await?;
        db.signin(Root {
            username: config.username.clone(),
            password: config.password.clone(),
        })
        .await?;
        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!(
            url = %config.url,
            namespace = %config.namespace,
            database = %config.database,
            "connected to SurrealDB"
        );
        Ok(Self { db })
    }

    pub fn client(&self) -> &Surreal<Client> {
        &self.db
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_or_falls_back_when_unset() {
        assert_eq!(env_or("HAMRAH_SURELY_UNSET_VAR", "fallback"), "fallback");
    }
}
