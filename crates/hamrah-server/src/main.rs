//! HAMRAH Server — application entry point.

use hamrah_auth::{AuthConfig, AuthService};
use hamrah_db::repository::{SurrealProfileRepository, SurrealUserRepository};
use hamrah_db::{DbConfig, DbManager};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("hamrah=info".parse().unwrap()),
        )
        .json()
        .init();

    tracing::info!("Starting HAMRAH server...");

    let db_config = DbConfig::from_env();
    let manager = match DbManager::connect(&db_config).await {
        Ok(manager) => manager,
        Err(e) => {
            tracing::error!(error = %e, "Failed to connect to SurrealDB");
            std::process::exit(1);
        }
    };

    if let Err(e) = hamrah_db::run_migrations(manager.client()).await {
        tracing::error!(error = %e, "Migrations failed");
        std::process::exit(1);
    }

    let _auth = AuthService::new(
        SurrealUserRepository::new(manager.client().clone()),
        SurrealProfileRepository::new(manager.client().clone()),
        AuthConfig::from_env(),
    );

    // TODO: mount the HTTP transport (routes, auth guard, cookie and
    // header plumbing) on top of the service.

    tracing::info!("HAMRAH server stopped.");
}
