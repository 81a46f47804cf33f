//! Password hashing collaborator.

use crate::errors::DomainError;

/// Capability for hashing and checking passwords.
///
/// The hashing primitive itself lives outside the core; the production
/// implementation (bcrypt) is injected at wiring time.
pub trait PasswordHasher: Send + Sync {
    /// Derive a storable digest from a plain password
    fn hash(&self, plain: &str) -> Result<String, DomainError>;

    /// Check a plain password against a stored digest
    fn verify(&self, plain: &str, digest: &str) -> Result<bool, DomainError>;
}

/// Identity "hasher" for tests.
#[cfg(test)]
pub struct PlainTextHasher;

#[cfg(test)]
impl PasswordHasher for PlainTextHasher {
    fn hash(&self, plain: &str) -> Result<String, DomainError> {
        Ok(plain.to_string())
    }

    fn verify(&self, plain: &str, digest: &str) -> Result<bool, DomainError> {
        Ok(plain == digest)
    }
}
