/**
 * Request Payload Validation
 *
 * Validation rules for the signup, signin, and update payloads. Each
 * validator inspects an already-deserialized request and returns either
 * `Ok(())` or the full list of field errors; validators never panic.
 *
 * # Rules
 *
 * - signup: username must be email-shaped; username, firstName, lastName,
 *   and password must all be non-empty
 * - signin: username must be email-shaped and non-empty; password non-empty
 * - update: every field is optional, but a field that is present must be
 *   non-empty
 */

use serde::Serialize;

use crate::users::handlers::types::{SigninRequest, SignupRequest, UpdateRequest};

/// A single validation failure, attributable to one field
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending field, as it appears on the wire
    pub field: String,
    /// What was wrong with it
    pub message: String,
}

impl FieldError {
    fn new(field: &str, message: &str) -> Self {
        Self {
            field: field.to_string(),
            message: message.to_string(),
        }
    }
}

/// Check whether a string is shaped like an email address
///
/// Accepts exactly one `@` with a non-empty local part and a domain that
/// contains a `.` after its first character. This is a shape check, not
/// RFC 5322 parsing.
pub fn is_email_shaped(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = match parts.next() {
        Some(domain) => domain,
        None => return false,
    };

    if local.is_empty() || domain.contains('@') {
        return false;
    }

    // Domain needs a dot that is neither leading nor trailing
    match domain.find('.') {
        Some(idx) => idx > 0 && idx < domain.len() - 1,
        None => false,
    }
}

/// Validate a signup payload
pub fn signup(request: &SignupRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if request.username.is_empty() {
        errors.push(FieldError::new("username", "is required"));
    } else if !is_email_shaped(&request.username) {
        errors.push(FieldError::new("username", "must be a valid email address"));
    }
    if request.first_name.is_empty() {
        errors.push(FieldError::new("firstName", "is required"));
    }
    if request.last_name.is_empty() {
        errors.push(FieldError::new("lastName", "is required"));
    }
    if request.password.is_empty() {
        errors.push(FieldError::new("password", "is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a signin payload
pub fn signin(request: &SigninRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if request.username.is_empty() {
        errors.push(FieldError::new("username", "is required"));
    } else if !is_email_shaped(&request.username) {
        errors.push(FieldError::new("username", "must be a valid email address"));
    }
    if request.password.is_empty() {
        errors.push(FieldError::new("password", "is required"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate an update payload
///
/// All fields are optional; an entirely empty payload is accepted and the
/// resulting update is a no-op.
pub fn update(request: &UpdateRequest) -> Result<(), Vec<FieldError>> {
    let mut errors = Vec::new();

    if matches!(request.password.as_deref(), Some("")) {
        errors.push(FieldError::new("password", "must not be empty"));
    }
    if matches!(request.first_name.as_deref(), Some("")) {
        errors.push(FieldError::new("firstName", "must not be empty"));
    }
    if matches!(request.last_name.as_deref(), Some("")) {
        errors.push(FieldError::new("lastName", "must not be empty"));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn signup_request() -> SignupRequest {
        SignupRequest {
            username: "a@x.com".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            password: "pw".to_string(),
        }
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_email_shaped("a@x.com"));
        assert!(is_email_shaped("first.last@sub.example.org"));
        assert!(!is_email_shaped("plainstring"));
        assert!(!is_email_shaped("@x.com"));
        assert!(!is_email_shaped("a@"));
        assert!(!is_email_shaped("a@nodot"));
        assert!(!is_email_shaped("a@.com"));
        assert!(!is_email_shaped("a@x."));
        assert!(!is_email_shaped("a@b@c.com"));
        assert!(!is_email_shaped(""));
    }

    #[test]
    fn test_valid_signup_passes() {
        assert_eq!(signup(&signup_request()), Ok(()));
    }

    #[test]
    fn test_signup_rejects_bad_email() {
        let mut request = signup_request();
        request.username = "not-an-email".to_string();

        let errors = signup(&request).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "username");
    }

    #[test]
    fn test_signup_collects_all_errors() {
        let request = SignupRequest {
            username: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            password: String::new(),
        };

        let errors = signup(&request).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["username", "firstName", "lastName", "password"]);
    }

    #[test]
    fn test_signin_rules() {
        assert!(signin(&SigninRequest {
            username: "a@x.com".to_string(),
            password: "pw".to_string(),
        })
        .is_ok());

        let errors = signin(&SigninRequest {
            username: "nope".to_string(),
            password: String::new(),
        })
        .unwrap_err();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_update_accepts_empty_payload() {
        assert!(update(&UpdateRequest::default()).is_ok());
    }

    #[test]
    fn test_update_rejects_present_but_empty_fields() {
        let request = UpdateRequest {
            password: Some(String::new()),
            first_name: Some("A".to_string()),
            last_name: Some(String::new()),
        };

        let errors = update(&request).unwrap_err();
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["password", "lastName"]);
    }
}
