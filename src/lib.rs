//! walletd - Main Library
//!
//! walletd is a small user/account service. It provides signup, signin,
//! profile update, user search, and current-user lookup over HTTP, backed
//! by PostgreSQL. Passwords are stored as bcrypt hashes and sessions are
//! stateless JWTs signed with a process-wide secret.
//!
//! # Module Structure
//!
//! The crate is organized into focused modules:
//!
//! - **`server`** - Configuration, application state, startup wiring
//! - **`routes`** - HTTP route table and middleware layering
//! - **`auth`** - Password hashing and JWT issuance/verification
//! - **`middleware`** - Bearer-token authentication gate
//! - **`users`** - User storage, input validation, HTTP handlers
//! - **`accounts`** - Account storage (created alongside users at signup)
//! - **`error`** - API error taxonomy and HTTP response conversion
//!
//! # Authentication Flow
//!
//! 1. **Signup**: payload validated, password hashed, user + account created
//!    in one transaction, JWT returned
//! 2. **Signin**: credentials verified against the stored hash, JWT returned
//! 3. **Protected routes**: the auth middleware verifies the bearer token and
//!    injects the authenticated user id before the handler runs

/// Account storage
pub mod accounts;

/// Password hashing and session tokens
pub mod auth;

/// API error types
pub mod error;

/// Request authentication middleware
pub mod middleware;

/// HTTP route configuration
pub mod routes;

/// Server configuration, state, and startup
pub mod server;

/// User storage, validation, and handlers
pub mod users;

// Re-export commonly used types
pub use error::ApiError;
pub use server::config::AppConfig;
pub use server::state::AppState;
