//! bcrypt implementation of the password hashing capability.

use td_core::errors::DomainError;
use td_core::services::auth::PasswordHasher;

/// bcrypt-backed password hasher.
///
/// Verification runs in constant time with respect to the password; hash
/// comparison never happens outside bcrypt.
#[derive(Clone, Copy)]
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Override the work factor; tests use the minimum cost
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasher for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> Result<String, DomainError> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Password hashing failed: {}", e),
        })
    }

    fn verify(&self, password: &str, password_hash: &str) -> Result<bool, DomainError> {
        bcrypt::verify(password, password_hash).map_err(|e| DomainError::Internal {
            message: format!("Password verification failed: {}", e),
        })
    }
}
