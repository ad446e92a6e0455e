//! Server Module
//!
//! Configuration loading, application state, and startup wiring for the
//! Axum HTTP server.

/// Environment-backed configuration
pub mod config;

/// Server initialization
pub mod init;

/// Application state and extraction
pub mod state;

pub use config::AppConfig;
pub use init::create_app;
pub use state::AppState;
