//! Middleware Module
//!
//! Request-processing middleware. Currently only the bearer-token
//! authentication gate lives here.

/// Bearer-token authentication gate
pub mod auth;

pub use auth::{require_auth, AuthUser, AuthenticatedUser};
