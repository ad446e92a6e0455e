/**
 * Get Current User Handler
 *
 * This module implements the handler for GET /getUser, which returns the
 * record of the currently authenticated user.
 *
 * # Response
 *
 * Returns the public profile shape only; the stored password hash is never
 * serialized.
 */

use axum::{extract::State, response::Json};
use sqlx::PgPool;

use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::users::handlers::types::UserProfile;
use crate::users::store;

/// Get current user handler
///
/// The user id comes from the verified token, injected by the auth
/// middleware.
///
/// # Errors
///
/// * `404` - the authenticated user no longer exists
/// * `500` - database failure
pub async fn get_current_user(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
) -> Result<Json<UserProfile>, ApiError> {
    let record = store::get_user_by_id(&pool, user.user_id)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Current-user lookup missed: {}", user.user_id);
            ApiError::not_found("User not found")
        })?;

    Ok(Json(UserProfile::from(record)))
}
