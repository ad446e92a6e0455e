/**
 * Error Conversion
 *
 * This module implements `IntoResponse` for `ApiError`, allowing handlers
 * to return `Result<Json<T>, ApiError>` directly.
 *
 * # Response Format
 *
 * Error responses are JSON:
 *
 * ```json
 * {
 *   "message": "Incorrect inputs",
 *   "details": [{"field": "username", "message": "..."}]
 * }
 * ```
 *
 * `details` is only present for validation failures.
 */

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};

use crate::error::types::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Server-side failures carry internal detail that must be logged
        // here and nowhere else.
        if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Internal error: {:?}", self);
        }

        let mut body = serde_json::json!({
            "message": self.client_message(),
        });
        if let Some(details) = self.details() {
            body["details"] = serde_json::json!(details);
        }

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::users::validate::FieldError;
    use axum::body::to_bytes;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_validation_error_response_includes_details() {
        let error = ApiError::invalid_input(
            StatusCode::BAD_REQUEST,
            "Incorrect inputs",
            vec![FieldError {
                field: "password".to_string(),
                message: "is required".to_string(),
            }],
        );

        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Incorrect inputs");
        assert_eq!(body["details"][0]["field"], "password");
    }

    #[tokio::test]
    async fn test_database_error_response_is_generic() {
        let error = ApiError::Database(sqlx::Error::PoolClosed);
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Internal server error");
        assert!(body.get("details").is_none());
    }

    #[tokio::test]
    async fn test_conflict_response() {
        let response = ApiError::conflict("Email already taken").into_response();
        assert_eq!(response.status(), StatusCode::LENGTH_REQUIRED);

        let body = body_json(response).await;
        assert_eq!(body["message"], "Email already taken");
    }
}
