//! Mock implementation of TokenRepository for testing

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::token::RefreshToken;
use crate::errors::DomainError;

use super::r#trait::TokenRepository;

/// In-memory token repository for tests.
///
/// `mark_used` performs its check-and-set under a single write lock,
/// matching the conditional-update guarantee of the MySQL implementation so
/// concurrency properties can be exercised in-process.
#[derive(Clone, Default)]
pub struct MockTokenRepository {
    tokens: Arc<RwLock<HashMap<String, RefreshToken>>>,
}

impl MockTokenRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot a stored record by hash
    pub async fn get(&self, token_hash: &str) -> Option<RefreshToken> {
        self.tokens.read().await.get(token_hash).cloned()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.tokens.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.tokens.read().await.is_empty()
    }
}

#[async_trait]
impl TokenRepository for MockTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let mut tokens = self.tokens.write().await;

        if tokens.contains_key(&token.token_hash) {
            return Err(DomainError::Validation {
                message: "Token already exists".to_string(),
            });
        }

        tokens.insert(token.token_hash.clone(), token.clone());
        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let tokens = self.tokens.read().await;
        Ok(tokens.get(token_hash).cloned())
    }

    async fn mark_used(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(token_hash) {
            Some(token) if !token.is_used && !token.is_revoked => {
                token.mark_used();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError> {
        let mut tokens = self.tokens.write().await;

        match tokens.get_mut(token_hash) {
            Some(token) if !token.is_revoked => {
                token.revoke();
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let mut tokens = self.tokens.write().await;
        let initial_count = tokens.len();

        tokens.retain(|_, token| !token.is_expired());

        Ok(initial_count - tokens.len())
    }
}
