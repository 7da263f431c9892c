//! Password hashing with Argon2

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Hash error: {0}")]
    HashError(String),
}

pub struct PasswordService;

impl PasswordService {
    /// Hash a plaintext password into a PHC string with a fresh salt.
    pub fn hash(password: &str) -> Result<String, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| PasswordError::HashError(e.to_string()))
    }

    /// Verify a plaintext password against a stored PHC string.
    ///
    /// A malformed stored hash verifies as false rather than erroring; the
    /// caller treats it the same as a wrong password.
    pub fn verify(password: &str, hash: &str) -> bool {
        match PasswordHash::new(hash) {
            Ok(parsed_hash) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify() {
        let hash = PasswordService::hash("correct horse battery").unwrap();
        assert!(PasswordService::verify("correct horse battery", &hash));
        assert!(!PasswordService::verify("wrong guess", &hash));
    }

    #[test]
    fn test_hashes_are_salted() {
        let a = PasswordService::hash("same input").unwrap();
        let b = PasswordService::hash("same input").unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_malformed_digest_verifies_false() {
        assert!(!PasswordService::verify("anything", "not-a-phc-string"));
        assert!(!PasswordService::verify("anything", ""));
    }
}
