//! Redis-backed task list cache.
//!
//! One entry under the fixed key `taskList`, holding the serialized task
//! array with a 5-minute TTL. Writers invalidate the key unconditionally.

use async_trait::async_trait;
use td_core::errors::DomainError;
use td_core::services::task::TaskCache;
use td_shared::config::cache::TASK_LIST_KEY;
use td_shared::config::CacheConfig;
use tracing::debug;

use super::redis_client::RedisClient;

/// Redis implementation of the task list cache
#[derive(Clone)]
pub struct RedisTaskCache {
    client: RedisClient,
    ttl_secs: u64,
}

impl RedisTaskCache {
    pub fn new(client: RedisClient, config: &CacheConfig) -> Self {
        Self {
            client,
            ttl_secs: config.task_list_ttl_secs,
        }
    }
}

#[async_trait]
impl TaskCache for RedisTaskCache {
    async fn fetch_task_list(&self) -> Result<Option<String>, DomainError> {
        let cached = self.client.get(TASK_LIST_KEY).await?;
        debug!(hit = cached.is_some(), "task list cache lookup");
        Ok(cached)
    }

    async fn store_task_list(&self, payload: &str) -> Result<(), DomainError> {
        self.client
            .set_with_expiry(TASK_LIST_KEY, payload, self.ttl_secs)
            .await?;
        Ok(())
    }

    async fn invalidate_task_list(&self) -> Result<(), DomainError> {
        self.client.delete(TASK_LIST_KEY).await?;
        debug!("task list cache invalidated");
        Ok(())
    }
}
