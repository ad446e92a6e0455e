/**
 * Router Configuration
 *
 * This module provides the main router creation function that wires the
 * five user operations into a single Axum router.
 *
 * # Routes
 *
 * Public:
 * - `POST /signup` - User registration
 * - `POST /signin` - Credential verification, token issuance
 * - `GET /bulk` - Name search (query parameter `filter`)
 *
 * Protected (bearer token, enforced by the auth middleware before the
 * handler runs):
 * - `PUT /` - Partial profile update
 * - `GET /getUser` - Current-user lookup
 */

use axum::{
    middleware::from_fn_with_state,
    routing::{get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::auth::require_auth;
use crate::server::state::AppState;
use crate::users::handlers::{get_current_user, search_users, signin, signup, update_profile};

/// Create the Axum router with all routes configured
///
/// The auth middleware is layered onto the protected routes only; the
/// public routes never consult the Authorization header.
pub fn create_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/", put(update_profile))
        .route("/getUser", get(get_current_user))
        .route_layer(from_fn_with_state(state.clone(), require_auth));

    Router::new()
        .route("/signup", post(signup))
        .route("/signin", post(signin))
        .route("/bulk", get(search_users))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
