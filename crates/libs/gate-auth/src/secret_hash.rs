//! Secure password hashing and verification using Argon2.
//!
//! Each call to [`generate_secret_hash`] draws a fresh random salt, so
//! hashing the same password twice yields different strings. The salt and
//! parameters travel inside the PHC hash string, which is the only thing
//! that ever reaches the credential store.
//!
//! # Examples
//!
//! ```rust
//! use gate_auth::secret_hash::{generate_secret_hash, is_secret_valid};
//!
//! let hash = generate_secret_hash("user_password_123").unwrap();
//! assert!(is_secret_valid("user_password_123", &hash).unwrap());
//! assert!(!is_secret_valid("wrong_password", &hash).unwrap());
//! ```

use argon2::{
    Argon2, PasswordHasher, PasswordVerifier,
    password_hash::{self, PasswordHashString, SaltString},
};
use rand::rngs::OsRng;

use crate::prelude::*;

/// Generates a salted hash for the provided password.
///
/// The resulting string is safe to persist and carries everything needed
/// for later verification.
pub fn generate_secret_hash(pw: &str) -> Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();
    Ok(argon2.hash_password(pw.as_bytes(), &salt)?.to_string())
}

/// Verifies a password against a stored hash.
///
/// Recomputes the hash with the salt and parameters embedded in `hash` and
/// compares in constant time. A malformed stored hash is an error, not a
/// mismatch.
pub fn is_secret_valid(pw: &str, hash: &str) -> Result<bool> {
    let hash = PasswordHashString::new(hash)?;

    Ok(Argon2::default()
        .verify_password(pw.as_bytes(), &hash.password_hash())
        .is_ok())
}

impl From<password_hash::Error> for Error {
    fn from(value: password_hash::Error) -> Self {
        Self::PasswordHash(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_verify_roundtrip() {
        let hash = generate_secret_hash("secret123").expect("should hash");
        assert!(is_secret_valid("secret123", &hash).expect("should verify"));
    }

    #[test]
    fn test_wrong_password_fails() {
        let hash = generate_secret_hash("secret123").expect("should hash");
        assert!(!is_secret_valid("secret124", &hash).expect("should verify"));
    }

    #[test]
    fn test_salting_makes_hashes_unique() {
        let first = generate_secret_hash("secret123").expect("should hash");
        let second = generate_secret_hash("secret123").expect("should hash");
        assert_ne!(first, second);
    }

    #[test]
    fn test_corrupt_stored_hash_is_an_error() {
        let result = is_secret_valid("secret123", "not-a-phc-string");
        assert!(matches!(result, Err(Error::PasswordHash(_))));
    }
}
