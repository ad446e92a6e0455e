/**
 * User Search Handler
 *
 * This module implements the bulk search handler for GET /bulk.
 *
 * The filter (query parameter, defaults to empty) is matched
 * case-insensitively as a substring of either name; an empty filter lists
 * every user. Results use the public profile shape only.
 */

use axum::{
    extract::{Query, State},
    response::Json,
};
use serde::Deserialize;
use sqlx::PgPool;

use crate::error::ApiError;
use crate::users::handlers::types::{SearchResponse, UserProfile};
use crate::users::store;

/// Query parameters for the search endpoint
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Name substring to match; empty when omitted
    #[serde(default)]
    pub filter: String,
}

/// User search handler
///
/// # Errors
///
/// * `500` - datastore failure, reported with a generic message
pub async fn search_users(
    State(pool): State<PgPool>,
    Query(params): Query<SearchParams>,
) -> Result<Json<SearchResponse>, ApiError> {
    let users = store::search_users(&pool, &params.filter)
        .await
        .map_err(|e| {
            tracing::error!("User search failed: {:?}", e);
            ApiError::internal("Error fetching users")
        })?;

    Ok(Json(SearchResponse {
        user: users.into_iter().map(UserProfile::from).collect(),
    }))
}
