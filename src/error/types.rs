/**
 * API Error Types
 *
 * This module defines the error type used by HTTP handlers. Every failure a
 * handler can produce is represented here and maps to exactly one HTTP
 * status code and client-visible message.
 *
 * # Status Codes
 *
 * Signup and update report validation failures and username conflicts
 * with 411, signin uses 400/404, the auth gate uses 401, and server-side
 * failures are a generic 500. Existing clients depend on these codes.
 *
 * # Information Hygiene
 *
 * - `InvalidCredentials` always renders the same fixed message; the
 *   password-mismatch branch never reveals which part of the credentials
 *   was wrong.
 * - `Database` and `Hash` keep the underlying error for logging but never
 *   expose it to the client.
 */

use axum::http::StatusCode;
use thiserror::Error;

use crate::users::validate::FieldError;

/// Errors returned by API handlers
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request payload failed validation
    ///
    /// Carries the status code of the endpoint's wire contract (411 for
    /// signup/update, 400 for signin) and the per-field validation errors.
    #[error("{message}")]
    InvalidInput {
        /// HTTP status code for this endpoint's validation failures
        status: StatusCode,
        /// Client-visible summary message
        message: String,
        /// Per-field validation detail
        details: Vec<FieldError>,
    },

    /// A unique field is already taken
    #[error("{message}")]
    Conflict {
        /// Client-visible message
        message: String,
    },

    /// A lookup missed
    #[error("{message}")]
    NotFound {
        /// Client-visible message
        message: String,
    },

    /// Password did not match the stored hash
    ///
    /// The message is fixed so this branch cannot be used to distinguish a
    /// wrong password from a wrong username.
    #[error("Invalid username or password")]
    InvalidCredentials,

    /// Missing or invalid session token
    #[error("Unauthorized")]
    Unauthorized,

    /// Password hashing failed
    #[error("password hashing failed: {0}")]
    Hash(#[from] bcrypt::BcryptError),

    /// Database operation failed
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Other server-side failure with a caller-chosen client message
    #[error("{message}")]
    Internal {
        /// Client-visible message (must already be generic)
        message: String,
    },
}

impl ApiError {
    /// Create a validation error with per-field detail
    pub fn invalid_input(
        status: StatusCode,
        message: impl Into<String>,
        details: Vec<FieldError>,
    ) -> Self {
        Self::InvalidInput {
            status,
            message: message.into(),
            details,
        }
    }

    /// Create a conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Create an internal error with a generic client-visible message
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput { status, .. } => *status,
            Self::Conflict { .. } => StatusCode::LENGTH_REQUIRED,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::InvalidCredentials => StatusCode::BAD_REQUEST,
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::Hash(_) | Self::Database(_) | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Get the client-visible message for this error
    ///
    /// Server-side failures are collapsed to a generic message; the
    /// underlying error is only logged.
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidInput { message, .. } => message.clone(),
            Self::Conflict { message } => message.clone(),
            Self::NotFound { message } => message.clone(),
            Self::InvalidCredentials => "Invalid username or password".to_string(),
            Self::Unauthorized => "Unauthorized".to_string(),
            Self::Hash(_) | Self::Database(_) => "Internal server error".to_string(),
            Self::Internal { message } => message.clone(),
        }
    }

    /// Get the per-field validation detail, if any
    pub fn details(&self) -> Option<&[FieldError]> {
        match self {
            Self::InvalidInput { details, .. } if !details.is_empty() => Some(details),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_error() -> FieldError {
        FieldError {
            field: "username".to_string(),
            message: "must be a valid email address".to_string(),
        }
    }

    #[test]
    fn test_invalid_input_carries_status() {
        let error = ApiError::invalid_input(
            StatusCode::LENGTH_REQUIRED,
            "Incorrect inputs",
            vec![field_error()],
        );
        assert_eq!(error.status_code(), StatusCode::LENGTH_REQUIRED);
        assert_eq!(error.client_message(), "Incorrect inputs");
        assert_eq!(error.details().unwrap().len(), 1);
    }

    #[test]
    fn test_conflict_is_411() {
        let error = ApiError::conflict("Email already taken");
        assert_eq!(error.status_code(), StatusCode::LENGTH_REQUIRED);
        assert_eq!(error.client_message(), "Email already taken");
    }

    #[test]
    fn test_not_found_is_404() {
        let error = ApiError::not_found("User not found");
        assert_eq!(error.status_code(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_invalid_credentials_message_is_fixed() {
        let error = ApiError::InvalidCredentials;
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(error.client_message(), "Invalid username or password");
    }

    #[test]
    fn test_unauthorized_is_401() {
        assert_eq!(
            ApiError::Unauthorized.status_code(),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_database_error_is_generic_500() {
        let error = ApiError::Database(sqlx::Error::RowNotFound);
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.client_message(), "Internal server error");
        // Internal detail must never reach the client message
        assert!(!error.client_message().contains("row"));
    }

    #[test]
    fn test_details_absent_for_other_variants() {
        assert!(ApiError::Unauthorized.details().is_none());
        assert!(ApiError::conflict("taken").details().is_none());
    }
}
