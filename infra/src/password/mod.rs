//! bcrypt-backed password hashing.

use sf_core::errors::DomainError;
use sf_core::services::PasswordHasher;

/// Production [`PasswordHasher`] using bcrypt with the library's default
/// cost.
#[derive(Debug, Default, Clone, Copy)]
pub struct BcryptPasswordHasher;

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        bcrypt::hash(plain, bcrypt::DEFAULT_COST)
            .map_err(|error| DomainError::internal(format!("password hashing failed: {error}")))
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, DomainError> {
        bcrypt::verify(plain, digest)
            .map_err(|error| DomainError::internal(format!("password check failed: {error}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_then_verify_round_trip() {
        let hasher = BcryptPasswordHasher::new();
        let digest = hasher.hash("hunter2").unwrap();

        assert_ne!(digest, "hunter2");
        assert!(hasher.verify("hunter2", &digest).unwrap());
        assert!(!hasher.verify("wrong", &digest).unwrap());
    }

    #[test]
    fn test_garbage_digest_is_an_error() {
        let hasher = BcryptPasswordHasher::new();
        assert!(hasher.verify("hunter2", "not-a-bcrypt-digest").is_err());
    }
}
