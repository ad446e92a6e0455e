/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server:
 * database pool creation, migrations, state construction, and route
 * configuration.
 *
 * # Initialization Process
 *
 * 1. Connect to PostgreSQL using the configured URL
 * 2. Run database migrations
 * 3. Build the application state (pool + token keys)
 * 4. Create and configure the router
 *
 * Unlike configuration loading, failures here are fatal: the service cannot
 * do anything useful without its datastore.
 */

use axum::Router;
use sqlx::PgPool;
use thiserror::Error;

use crate::auth::sessions::TokenKeys;
use crate::routes::create_router;
use crate::server::config::AppConfig;
use crate::server::state::AppState;

/// Errors raised during server startup
#[derive(Debug, Error)]
pub enum InitError {
    /// Failed to connect to the database
    #[error("database connection failed: {0}")]
    Database(#[from] sqlx::Error),

    /// Failed to run database migrations
    #[error("database migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),
}

/// Create and configure the Axum application
///
/// # Arguments
///
/// * `config` - Configuration loaded at startup
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Errors
///
/// Returns [`InitError`] if the database is unreachable or migrations fail.
pub async fn create_app(config: &AppConfig) -> Result<Router, InitError> {
    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&config.database_url).await?;

    tracing::info!("Running database migrations...");
    sqlx::migrate!().run(&pool).await?;

    let state = AppState {
        db_pool: pool,
        tokens: TokenKeys::new(&config.jwt_secret),
    };

    tracing::info!("Router configured");
    Ok(create_router(state))
}
