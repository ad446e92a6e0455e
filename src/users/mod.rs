//! Users Module
//!
//! Everything user-facing: the database model and queries, request
//! validation rules, and the HTTP handlers for the five operations.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs          - Module exports
//! ├── store.rs        - User model and database operations
//! ├── validate.rs     - Request payload validation rules
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── signup.rs   - User registration
//!     ├── signin.rs   - Credential verification and token issuance
//!     ├── update.rs   - Partial profile update
//!     ├── search.rs   - Name substring search
//!     └── me.rs       - Current-user lookup
//! ```

/// HTTP handlers
pub mod handlers;

/// User model and database operations
pub mod store;

/// Request payload validation
pub mod validate;

pub use store::User;
