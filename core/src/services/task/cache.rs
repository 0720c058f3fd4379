//! Task list cache interface.

use async_trait::async_trait;

use crate::errors::DomainError;

/// Cache over the serialized task list.
///
/// The cache holds one entry: the full task list as a JSON array under a
/// fixed key with a fixed TTL (both owned by the implementation). Values
/// pass through as opaque serialized strings so implementations never
/// depend on the entity shape.
#[async_trait]
pub trait TaskCache: Send + Sync {
    /// Fetch the cached serialized list, if present
    async fn fetch_task_list(&self) -> Result<Option<String>, DomainError>;

    /// Store the serialized list, refreshing the TTL
    async fn store_task_list(&self, payload: &str) -> Result<(), DomainError>;

    /// Drop the cached list unconditionally
    async fn invalidate_task_list(&self) -> Result<(), DomainError>;
}
