//! User repository trait defining the interface for user persistence.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations must enforce username and email uniqueness; a save that
/// collides on either surfaces `AuthError::DuplicateUser`.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user
    ///
    /// # Returns
    /// * `Ok(User)` - The saved user
    /// * `Err(DomainError)` - Save failed (duplicate username/email or store error)
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Find a user by their unique identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// Find a user by email (the login identifier)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError>;
}
