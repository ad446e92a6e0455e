//! API Error Types
//!
//! This module defines the error taxonomy for the service and its
//! conversion to HTTP responses.
//!
//! # Error Categories
//!
//! - `InvalidInput` - request payload failed schema validation
//! - `Conflict` - a unique field (the username) is already taken
//! - `NotFound` - a lookup missed
//! - `InvalidCredentials` - password mismatch on signin
//! - `Unauthorized` - missing or invalid session token
//! - `Hash` / `Database` / `Internal` - server-side failures, reported to
//!   the client with a generic message only

/// Error type definitions
pub mod types;

/// Conversion to HTTP responses
pub mod conversion;

pub use types::ApiError;
