/**
 * Server Configuration
 *
 * This module handles loading and validation of server configuration from
 * environment variables.
 *
 * # Configuration Sources
 *
 * - `DATABASE_URL` - PostgreSQL connection string (required)
 * - `JWT_SECRET` - signing secret for session tokens (required)
 * - `SERVER_PORT` - listen port (optional, defaults to 3000)
 *
 * # Error Handling
 *
 * Missing required variables are a hard startup failure. The signing secret
 * in particular is never defaulted: a guessable secret would let anyone
 * mint valid session tokens.
 */

use thiserror::Error;

/// Errors raised while loading configuration from the environment
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required environment variable is missing or empty
    #[error("missing required environment variable {0}")]
    MissingVar(&'static str),

    /// `SERVER_PORT` is set but not a valid port number
    #[error("invalid SERVER_PORT value: {0}")]
    InvalidPort(String),
}

/// Application configuration, loaded once at startup
///
/// The loaded struct is passed into [`create_app`](crate::server::init::create_app)
/// and from there into [`AppState`](crate::server::state::AppState); nothing
/// else reads the environment after startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// PostgreSQL connection string
    pub database_url: String,
    /// Secret used to sign and verify session tokens
    pub jwt_secret: String,
    /// Port the HTTP server listens on
    pub port: u16,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] if `DATABASE_URL` or `JWT_SECRET`
    /// is unset or empty, and [`ConfigError::InvalidPort`] if `SERVER_PORT`
    /// is set to something that does not parse as a port.
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = require_var("DATABASE_URL")?;
        let jwt_secret = require_var("JWT_SECRET")?;

        let port = match std::env::var("SERVER_PORT") {
            Ok(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(raw))?,
            Err(_) => 3000,
        };

        Ok(Self {
            database_url,
            jwt_secret,
            port,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    match std::env::var(name) {
        Ok(value) if !value.is_empty() => Ok(value),
        _ => Err(ConfigError::MissingVar(name)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_var_message_names_variable() {
        let err = ConfigError::MissingVar("JWT_SECRET");
        assert!(err.to_string().contains("JWT_SECRET"));
    }

    #[test]
    fn test_invalid_port_message() {
        let err = ConfigError::InvalidPort("not-a-port".to_string());
        assert!(err.to_string().contains("not-a-port"));
    }
}
