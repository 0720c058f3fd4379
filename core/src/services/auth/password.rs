//! Password hashing capability.

use crate::errors::DomainError;

/// Capability interface over a memory-hard password hash.
///
/// Verification must not leak timing information; that property is
/// delegated to the backing primitive (bcrypt in `td_infra`), which is also
/// why `verify` takes the stored hash rather than re-deriving one.
pub trait PasswordHasher: Send + Sync {
    /// Hash a plaintext password for storage
    fn hash(&self, password: &str) -> Result<String, DomainError>;

    /// Check a plaintext password against a stored hash
    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError>;
}

/// Trivial hasher for tests; not a real hash
#[derive(Clone, Copy, Default)]
pub struct MockPasswordHasher;

impl PasswordHasher for MockPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        Ok(format!("mock${password}"))
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        Ok(password_hash == format!("mock${password}"))
    }
}
