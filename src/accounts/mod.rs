//! Accounts Module
//!
//! Account storage. An account is created alongside its user at signup
//! and carries a non-negative balance.

/// Account model and database operations
pub mod store;

pub use store::Account;
