//! Cache module for Redis-based caching
//!
//! Provides the Redis client wrapper and the task-list cache used by the
//! task service's read path.

pub mod redis_client;
pub mod task_cache;

pub use redis_client::RedisClient;
pub use task_cache::RedisTaskCache;
