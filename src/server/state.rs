/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * The `AppState` struct serves as the central state container for the
 * application, holding:
 * - The PostgreSQL connection pool
 * - The session token keys (built once from the configured secret)
 *
 * # State Extraction
 *
 * The `FromRef` implementations allow Axum handlers to extract specific
 * parts of the state without needing the entire `AppState`. This follows
 * Axum's recommended pattern for state management.
 */

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::sessions::TokenKeys;

/// Application state shared across all request handlers
///
/// All durable state lives in the database; this struct only carries the
/// connection pool and the token signing keys, both of which are cheap to
/// clone.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db_pool: PgPool,

    /// Keys used to issue and verify session tokens
    pub tokens: TokenKeys,
}

/// Allow handlers to extract the database pool directly from `AppState`
impl FromRef<AppState> for PgPool {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}

/// Allow handlers and middleware to extract the token keys directly
/// from `AppState`
impl FromRef<AppState> for TokenKeys {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.tokens.clone()
    }
}
