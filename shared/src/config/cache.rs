//! Cache configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Fixed cache key for the serialized task list
pub const TASK_LIST_KEY: &str = "taskList";

/// Fixed TTL for the cached task list (5 minutes)
pub const TASK_LIST_TTL_SECS: u64 = 300;

/// Redis cache configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CacheConfig {
    /// Redis connection URL
    pub url: String,

    /// Per-command timeout in seconds
    pub command_timeout_secs: u64,

    /// TTL applied to the cached task list
    pub task_list_ttl_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            url: String::from("redis://127.0.0.1:6379"),
            command_timeout_secs: 2,
            task_list_ttl_secs: TASK_LIST_TTL_SECS,
        }
    }
}

impl CacheConfig {
    /// Build the configuration from `REDIS_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            url: env_or("REDIS_URL", &defaults.url),
            command_timeout_secs: env_parse_or(
                "REDIS_COMMAND_TIMEOUT_SECS",
                defaults.command_timeout_secs,
            ),
            task_list_ttl_secs: env_parse_or("TASK_LIST_TTL_SECS", defaults.task_list_ttl_secs),
        }
    }
}
