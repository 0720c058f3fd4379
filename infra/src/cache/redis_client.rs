//! Thin async Redis client wrapper.

use std::time::Duration;

use redis::aio::ConnectionManager;
use td_shared::config::CacheConfig;
use tracing::info;

use crate::InfrastructureError;

/// Redis client owning a multiplexed connection manager.
///
/// Acquired once at startup and shared by handle; every command carries the
/// configured timeout so a stalled cache cannot stall a request.
#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
    command_timeout: Duration,
}

impl RedisClient {
    /// Connect to Redis and prepare the connection manager
    pub async fn connect(config: &CacheConfig) -> Result<Self, InfrastructureError> {
        let client = redis::Client::open(config.url.as_str())?;
        let manager = ConnectionManager::new(client).await?;

        info!(url = %config.url, "redis connection ready");
        Ok(Self {
            manager,
            command_timeout: Duration::from_secs(config.command_timeout_secs),
        })
    }

    async fn run<T: redis::FromRedisValue>(
        &self,
        cmd: redis::Cmd,
    ) -> Result<T, InfrastructureError> {
        let mut conn = self.manager.clone();
        match tokio::time::timeout(self.command_timeout, cmd.query_async(&mut conn)).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(InfrastructureError::Timeout(self.command_timeout.as_secs())),
        }
    }

    /// GET a string value
    pub async fn get(&self, key: &str) -> Result<Option<String>, InfrastructureError> {
        let mut cmd = redis::cmd("GET");
        cmd.arg(key);
        self.run(cmd).await
    }

    /// SET a value with an expiry in seconds
    pub async fn set_with_expiry(
        &self,
        key: &str,
        value: &str,
        expiry_secs: u64,
    ) -> Result<(), InfrastructureError> {
        let mut cmd = redis::cmd("SET");
        cmd.arg(key).arg(value).arg("EX").arg(expiry_secs);
        self.run(cmd).await
    }

    /// DEL a key; missing keys are not an error
    pub async fn delete(&self, key: &str) -> Result<(), InfrastructureError> {
        let mut cmd = redis::cmd("DEL");
        cmd.arg(key);
        let _removed: i64 = self.run(cmd).await?;
        Ok(())
    }
}
