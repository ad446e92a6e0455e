/**
 * Session Tokens
 *
 * This module handles JWT generation and validation for user sessions.
 *
 * Tokens are signed with HS256 using the secret from the application
 * configuration. The keys are built once at startup and carried in
 * `AppState`; nothing here reads the environment.
 *
 * Tokens are stateless: the server verifies signatures rather than storing
 * sessions, so there is nothing to revoke or clean up server-side.
 */

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

/// Token lifetime: 30 days
pub const TOKEN_TTL_SECS: u64 = 30 * 24 * 60 * 60;

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    pub sub: String,
    /// Issued at time (Unix timestamp)
    pub iat: u64,
    /// Expiration time (Unix timestamp)
    pub exp: u64,
}

impl Claims {
    /// Parse the subject claim back into a user id
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Signing and verification keys for session tokens
///
/// Built once from the configured secret and shared via `AppState`.
#[derive(Clone)]
pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
}

impl TokenKeys {
    /// Build token keys from the configured signing secret
    pub fn new(secret: &str) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_ref()),
            decoding: DecodingKey::from_secret(secret.as_ref()),
        }
    }

    /// Issue a session token for a user
    ///
    /// The token binds the user id as its subject claim and expires
    /// [`TOKEN_TTL_SECS`] after issuance.
    pub fn issue(&self, user_id: Uuid) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_secs();

        let claims = Claims {
            sub: user_id.to_string(),
            iat: now,
            exp: now + TOKEN_TTL_SECS,
        };

        encode(&Header::default(), &claims, &self.encoding)
    }

    /// Verify a session token and return its claims
    ///
    /// Fails on signature mismatch, malformed tokens, and expired tokens.
    pub fn verify(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())?;
        Ok(data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys() -> TokenKeys {
        TokenKeys::new("test-secret")
    }

    #[test]
    fn test_issue_and_verify_roundtrip() {
        let user_id = Uuid::new_v4();
        let token = keys().issue(user_id).unwrap();
        assert!(!token.is_empty());

        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.user_id().unwrap(), user_id);
    }

    #[test]
    fn test_expiry_follows_issuance() {
        let token = keys().issue(Uuid::new_v4()).unwrap();
        let claims = keys().verify(&token).unwrap();
        assert_eq!(claims.exp, claims.iat + TOKEN_TTL_SECS);
    }

    #[test]
    fn test_verify_rejects_malformed_token() {
        assert!(keys().verify("invalid.token.here").is_err());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = TokenKeys::new("secret-a").issue(Uuid::new_v4()).unwrap();
        assert!(TokenKeys::new("secret-b").verify(&token).is_err());
    }
}
