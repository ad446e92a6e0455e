/**
 * Signin Handler
 *
 * This module implements the credential verification handler for
 * POST /signin.
 *
 * # Authentication Process
 *
 * 1. Validate the payload
 * 2. Look up the user by username
 * 3. Verify the password against the stored bcrypt hash
 * 4. Issue a JWT bound to the user id
 *
 * # Security
 *
 * - Password verification is constant-time (bcrypt)
 * - The mismatch branch returns a fixed generic message and never says
 *   which part of the credentials was wrong
 * - Passwords are never logged
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::auth::password::verify_password;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::handlers::types::{SigninRequest, TokenResponse};
use crate::users::{store, validate};

/// Sign in handler
///
/// # Errors
///
/// * `400` - payload failed validation, or the password did not match
/// * `404` - no user with that username
/// * `500` - verification or database failure
pub async fn signin(
    State(state): State<AppState>,
    Json(request): Json<SigninRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    validate::signin(&request).map_err(|details| {
        tracing::warn!("Signin validation failed");
        ApiError::invalid_input(StatusCode::BAD_REQUEST, "Incorrect inputs", details)
    })?;

    let user = store::get_user_by_username(&state.db_pool, &request.username)
        .await?
        .ok_or_else(|| {
            tracing::warn!("Signin for unknown username: {}", request.username);
            ApiError::not_found("User not found")
        })?;

    let valid = verify_password(&request.password, &user.password_hash)?;
    if !valid {
        tracing::warn!("Invalid password for user: {}", request.username);
        return Err(ApiError::InvalidCredentials);
    }

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::internal("Internal server error")
    })?;

    tracing::info!("User signed in: {}", user.username);

    Ok(Json(TokenResponse { token }))
}
