//! Token repository trait defining the interface for refresh token persistence.

use async_trait::async_trait;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

/// Repository trait for RefreshToken persistence operations
///
/// Tokens are stored by hash; the raw value never reaches the repository.
/// Spent and revoked tokens are kept as an audit trail and only flagged.
#[async_trait]
pub trait TokenRepository: Send + Sync {
    /// Save a new refresh token record
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError>;

    /// Find a refresh token by its hashed value
    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError>;

    /// Atomically mark a token as used.
    ///
    /// This is the single rotation-critical write: the update must apply
    /// only while the token is still unused and unrevoked, so two
    /// concurrent rotations of the same token cannot both succeed.
    ///
    /// # Returns
    /// * `Ok(true)` - The token was active and is now spent
    /// * `Ok(false)` - The token was missing, already used, or revoked
    /// * `Err(DomainError)` - Store error
    async fn mark_used(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Revoke a token; false when the token was missing or already inert
    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError>;

    /// Delete expired records (storage hygiene, not correctness)
    ///
    /// # Returns
    /// * `Ok(usize)` - Number of records deleted
    async fn delete_expired(&self) -> Result<usize, DomainError>;
}
