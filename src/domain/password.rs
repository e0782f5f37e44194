//! One-way secret hashing port.
//!
//! The domain treats hashing as an opaque collaborator: services only need
//! `hash` on registration or rotation and `verify` on login. The default
//! adapter uses argon2id with a per-secret random salt.

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{
    PasswordHash, PasswordHasher as _, PasswordVerifier as _, SaltString,
};

/// Failure producing a hash. Verification failures are not errors; they are
/// an expected `false`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("failed to hash secret: {message}")]
pub struct SecretHashError {
    pub message: String,
}

/// One-way, salted secret hashing.
pub trait SecretHasher: Send + Sync {
    /// Hash a plaintext secret for storage.
    fn hash(&self, secret: &str) -> Result<String, SecretHashError>;

    /// Check a plaintext secret against a stored hash.
    fn verify(&self, secret: &str, stored_hash: &str) -> bool;
}

/// Argon2id implementation of [`SecretHasher`].
#[derive(Debug, Clone, Default)]
pub struct Argon2SecretHasher;

impl SecretHasher for Argon2SecretHasher {
    fn hash(&self, secret: &str) -> Result<String, SecretHashError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|err| SecretHashError {
                message: err.to_string(),
            })
    }

    fn verify(&self, secret: &str, stored_hash: &str) -> bool {
        let Ok(parsed) = PasswordHash::new(stored_hash) else {
            tracing::warn!("stored secret hash failed to parse");
            return false;
        };
        Argon2::default()
            .verify_password(secret.as_bytes(), &parsed)
            .is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn hash_then_verify_round_trips() {
        let hasher = Argon2SecretHasher;
        let hash = hasher.hash("correct horse battery staple").expect("hash");
        assert!(hasher.verify("correct horse battery staple", &hash));
        assert!(!hasher.verify("wrong secret", &hash));
    }

    #[rstest]
    fn hashes_are_salted() {
        let hasher = Argon2SecretHasher;
        let first = hasher.hash("same secret").expect("hash");
        let second = hasher.hash("same secret").expect("hash");
        assert_ne!(first, second);
    }

    #[rstest]
    fn garbage_stored_hash_never_verifies() {
        let hasher = Argon2SecretHasher;
        assert!(!hasher.verify("anything", "not-a-phc-string"));
    }
}
