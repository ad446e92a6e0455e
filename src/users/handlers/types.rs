/**
 * Handler Types
 *
 * Request and response types shared across the user handlers. All wire
 * JSON uses camelCase keys.
 */

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::users::store::User;

/// Signup request body
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    /// Email-shaped username (unique)
    pub username: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
    /// Plaintext password (hashed before storage, never persisted as-is)
    pub password: String,
}

/// Signin request body
#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SigninRequest {
    /// Email-shaped username
    pub username: String,
    /// Plaintext password (verified against the stored hash)
    pub password: String,
}

/// Profile update request body; all fields optional
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRequest {
    /// New password (hashed before storage)
    pub password: Option<String>,
    /// New first name
    pub first_name: Option<String>,
    /// New last name
    pub last_name: Option<String>,
}

/// Signup response: confirmation message plus session token
#[derive(Debug, Serialize)]
pub struct SignupResponse {
    pub message: String,
    pub token: String,
}

/// Signin response: session token only
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub token: String,
}

/// Generic confirmation response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Public view of a user
///
/// The only user shape that ever leaves the service. The password hash and
/// audit timestamps are not part of it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// User ID
    pub id: Uuid,
    /// Username
    pub username: String,
    /// First name
    pub first_name: String,
    /// Last name
    pub last_name: String,
}

impl From<User> for UserProfile {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
        }
    }
}

/// Search response; clients expect the list under the `user` key
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub user: Vec<UserProfile>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_wire_keys_are_camel_case() {
        let request: SignupRequest = serde_json::from_value(serde_json::json!({
            "username": "a@x.com",
            "firstName": "A",
            "lastName": "B",
            "password": "pw"
        }))
        .unwrap();
        assert_eq!(request.first_name, "A");
        assert_eq!(request.last_name, "B");
    }

    #[test]
    fn test_profile_serialization_redacts_everything_else() {
        let user = User {
            id: Uuid::new_v4(),
            username: "a@x.com".to_string(),
            password_hash: "$2b$12$secret".to_string(),
            first_name: "Anna".to_string(),
            last_name: "Andrews".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(UserProfile::from(user)).unwrap();
        let keys: Vec<&str> = json.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        assert_eq!(keys.len(), 4);
        assert!(json.get("password").is_none());
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["firstName"], "Anna");
    }

    #[test]
    fn test_update_request_fields_default_to_absent() {
        let request: UpdateRequest = serde_json::from_str("{}").unwrap();
        assert!(request.password.is_none());
        assert!(request.first_name.is_none());
        assert!(request.last_name.is_none());
    }
}
