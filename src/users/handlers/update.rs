/**
 * Profile Update Handler
 *
 * This module implements the partial profile update handler for PUT /.
 *
 * # Update Process
 *
 * 1. The auth middleware has already verified the token and injected the
 *    authenticated user id
 * 2. Validate the payload; a validation failure returns immediately and
 *    nothing is written
 * 3. Hash the new password if one was supplied
 * 4. Apply the partial update, scoped to the authenticated user's row
 *
 * # Ownership
 *
 * The updated row is selected by the id from the verified token, never by
 * anything in the request body, so a caller can only ever mutate their own
 * record.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use sqlx::PgPool;

use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::middleware::auth::AuthUser;
use crate::users::handlers::types::{MessageResponse, UpdateRequest};
use crate::users::store::{self, UserChanges};
use crate::users::validate;

/// Profile update handler
///
/// The body extractor is wrapped so a missing or malformed JSON body gets
/// the same 411 response as a rule violation, keeping the endpoint's
/// failure shape uniform.
///
/// # Errors
///
/// * `411` - payload missing, malformed, or failed validation
/// * `404` - the authenticated user no longer exists
/// * `500` - hashing or database failure
pub async fn update_profile(
    State(pool): State<PgPool>,
    AuthUser(user): AuthUser,
    body: Result<Json<UpdateRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(
            "Malformed update payload from user {}: {}",
            user.user_id,
            rejection
        );
        ApiError::invalid_input(
            StatusCode::LENGTH_REQUIRED,
            "Error while updating information",
            Vec::new(),
        )
    })?;

    validate::update(&request).map_err(|details| {
        tracing::warn!("Update validation failed for user {}", user.user_id);
        ApiError::invalid_input(
            StatusCode::LENGTH_REQUIRED,
            "Error while updating information",
            details,
        )
    })?;

    // A replacement password is hashed exactly like at signup; the
    // plaintext never reaches the store.
    let password_hash = match request.password {
        Some(plaintext) => Some(hash_password(&plaintext)?),
        None => None,
    };

    let changes = UserChanges {
        password_hash,
        first_name: request.first_name,
        last_name: request.last_name,
    };

    store::update_user(&pool, user.user_id, changes)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Update for missing user: {}", user.user_id);
            ApiError::not_found("User not found")
        })?;

    tracing::info!("Profile updated for user {}", user.user_id);

    Ok(Json(MessageResponse {
        message: "Updated successfully".to_string(),
    }))
}
