//! Mock implementation of UserRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::user::User;
use crate::errors::{AuthError, DomainError};

use super::r#trait::UserRepository;

/// In-memory user repository for tests
#[derive(Clone, Default)]
pub struct MockUserRepository {
    users: Arc<RwLock<HashMap<Uuid, User>>>,
}

impl MockUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a user, simulating account deletion after token issuance
    pub async fn remove(&self, id: Uuid) -> bool {
        self.users.write().await.remove(&id).is_some()
    }
}

#[async_trait]
impl UserRepository for MockUserRepository {
    async fn save(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let duplicate = users
            .values()
            .any(|u| u.username == user.username || u.email == user.email);
        if duplicate {
            return Err(AuthError::DuplicateUser.into());
        }

        users.insert(user.id, user.clone());
        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().find(|u| u.username == username).cloned())
    }
}
