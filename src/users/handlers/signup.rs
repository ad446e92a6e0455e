/**
 * Signup Handler
 *
 * This module implements the user registration handler for POST /signup.
 *
 * # Registration Process
 *
 * 1. Validate the payload (email-shaped username, all fields present)
 * 2. Check if the username is already taken
 * 3. Hash the password using bcrypt
 * 4. Create the user and their account in one transaction
 * 5. Issue a JWT bound to the new user id
 * 6. Return the token
 *
 * # Security
 *
 * - The password is hashed before it touches the database; the plaintext
 *   is never persisted or logged
 * - The account's starting balance is seeded randomly in [1, 10001)
 * - A unique-index race on the username maps to the same conflict
 *   response as the pre-check
 */

use axum::{extract::State, http::StatusCode, response::Json};

use crate::accounts;
use crate::auth::password::hash_password;
use crate::error::ApiError;
use crate::server::state::AppState;
use crate::users::handlers::types::{SignupRequest, SignupResponse};
use crate::users::{store, validate};

/// Sign up handler
///
/// # Errors
///
/// * `411` - payload failed validation, or the username is already taken
/// * `500` - hashing, token issuance, or database failure
pub async fn signup(
    State(state): State<AppState>,
    Json(request): Json<SignupRequest>,
) -> Result<Json<SignupResponse>, ApiError> {
    validate::signup(&request).map_err(|details| {
        tracing::warn!("Signup validation failed for {}", request.username);
        ApiError::invalid_input(StatusCode::LENGTH_REQUIRED, "Incorrect inputs", details)
    })?;

    if store::get_user_by_username(&state.db_pool, &request.username)
        .await?
        .is_some()
    {
        tracing::warn!("Signup rejected, username taken: {}", request.username);
        return Err(ApiError::conflict("Email already taken"));
    }

    let password_hash = hash_password(&request.password)?;

    // User and account are created atomically; a failure between the two
    // inserts rolls both back.
    let mut tx = state.db_pool.begin().await?;

    let user = match store::create_user(
        &mut *tx,
        &request.username,
        &password_hash,
        &request.first_name,
        &request.last_name,
    )
    .await
    {
        Ok(user) => user,
        // Lost the race against a concurrent signup for the same username
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            tracing::warn!("Signup race on username: {}", request.username);
            return Err(ApiError::conflict("Email already taken"));
        }
        Err(e) => return Err(e.into()),
    };

    let account = accounts::store::create_account(&mut *tx, user.id).await?;

    tx.commit().await?;

    let token = state.tokens.issue(user.id).map_err(|e| {
        tracing::error!("Failed to issue token: {:?}", e);
        ApiError::internal("Internal server error")
    })?;

    tracing::info!(
        "User created successfully: {} (account {})",
        user.username,
        account.id
    );

    Ok(Json(SignupResponse {
        message: "User created successfully".to_string(),
        token,
    }))
}
