/**
 * Password Hashing
 *
 * Thin wrappers over bcrypt for hashing and verifying passwords. bcrypt
 * embeds a per-call random salt in its output, so hashing the same
 * password twice produces different values, and verification is
 * deliberately expensive to resist brute force.
 */

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

/// Hash a plaintext password for storage
///
/// # Errors
///
/// Returns a [`BcryptError`] if hashing fails (effectively only on
/// resource exhaustion).
pub fn hash_password(plaintext: &str) -> Result<String, BcryptError> {
    hash(plaintext, DEFAULT_COST)
}

/// Verify a plaintext password against a stored hash
///
/// Returns `Ok(true)` iff the plaintext, hashed with the salt embedded in
/// `hashed`, reproduces `hashed`. Comparison is constant-time.
pub fn verify_password(plaintext: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(plaintext, hashed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_is_not_plaintext() {
        let hashed = hash_password("pw").unwrap();
        assert_ne!(hashed, "pw");
    }

    #[test]
    fn test_verify_roundtrip() {
        let hashed = hash_password("secret123").unwrap();
        assert!(verify_password("secret123", &hashed).unwrap());
        assert!(!verify_password("secret124", &hashed).unwrap());
    }

    #[test]
    fn test_salt_varies_per_call() {
        let first = hash_password("same-password").unwrap();
        let second = hash_password("same-password").unwrap();
        assert_ne!(first, second);
        // Both still verify
        assert!(verify_password("same-password", &first).unwrap());
        assert!(verify_password("same-password", &second).unwrap());
    }

    #[test]
    fn test_verify_rejects_garbage_hash() {
        assert!(verify_password("pw", "not-a-bcrypt-hash").is_err());
    }
}
