//! Authentication Module
//!
//! Cryptographic primitives for the service, consumed through libraries
//! rather than implemented here:
//!
//! - **`password`** - bcrypt hashing and verification of passwords
//! - **`sessions`** - JWT issuance and verification for session tokens
//!
//! # Security
//!
//! - Passwords are hashed with a per-call random salt before storage and
//!   are never persisted or logged in plaintext
//! - Session tokens are HS256 JWTs signed with the configured secret and
//!   carry the user id as their subject claim
//! - Password verification runs in constant time (bcrypt guarantee)

/// Password hashing and verification
pub mod password;

/// JWT session token issuance and verification
pub mod sessions;

pub use password::{hash_password, verify_password};
pub use sessions::{Claims, TokenKeys};
