//! HTTP Handlers
//!
//! One submodule per operation, plus the shared request/response types.

/// Current-user lookup handler
pub mod me;

/// Name search handler
pub mod search;

/// Signin handler
pub mod signin;

/// Signup handler
pub mod signup;

/// Request/response types
pub mod types;

/// Profile update handler
pub mod update;

pub use me::get_current_user;
pub use search::search_users;
pub use signin::signin;
pub use signup::signup;
pub use update::update_profile;
