/**
 * Authentication Middleware
 *
 * This module provides middleware for protecting routes that require
 * user authentication. It extracts and verifies JWT tokens from the
 * Authorization header and provides the user ID to handlers.
 *
 * This gate is the sole authorization boundary: the protected handlers
 * (profile update, current-user lookup) only ever see a user id that came
 * out of a verified token, never one supplied by the request body.
 */

use axum::{
    extract::{FromRequestParts, Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::auth::sessions::TokenKeys;
use crate::error::ApiError;

/// Authenticated user data extracted from a verified JWT
#[derive(Clone, Debug)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
}

/// Authentication middleware
///
/// This middleware:
/// 1. Extracts the JWT from the `Authorization: Bearer <token>` header
/// 2. Verifies the token signature and expiry
/// 3. Parses the user id from the subject claim
/// 4. Attaches [`AuthenticatedUser`] to request extensions for handlers
///
/// Returns 401 Unauthorized if the token is missing or invalid; the
/// protected handler is never invoked in that case.
pub async fn require_auth(
    State(tokens): State<TokenKeys>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| {
            tracing::warn!("Missing Authorization header");
            ApiError::Unauthorized
        })?;

    // Expected format: "Bearer <token>"
    let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
        tracing::warn!("Invalid Authorization header format");
        ApiError::Unauthorized
    })?;

    let claims = tokens.verify(token).map_err(|e| {
        tracing::warn!("Invalid token: {:?}", e);
        ApiError::Unauthorized
    })?;

    let user_id = claims.user_id().map_err(|e| {
        tracing::warn!("Invalid user ID in token: {:?}", e);
        ApiError::Unauthorized
    })?;

    request.extensions_mut().insert(AuthenticatedUser { user_id });

    Ok(next.run(request).await)
}

/// Axum extractor for the authenticated user
///
/// Usable as a handler parameter on any route behind [`require_auth`];
/// rejects with 401 if the middleware did not run.
#[derive(Clone, Debug)]
pub struct AuthUser(pub AuthenticatedUser);

impl<S: Send + Sync> FromRequestParts<S> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthenticatedUser>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::warn!("AuthenticatedUser not found in request extensions");
                ApiError::Unauthorized
            })
    }
}
