//! Configuration types for TaskDeck services
//!
//! Each service binary builds its configuration from the process environment
//! (after loading `.env` via dotenvy); the structs here carry sensible
//! development defaults so a bare environment still produces a runnable
//! configuration.

pub mod auth;
pub mod cache;
pub mod database;
pub mod gateway;
pub mod queue;
pub mod server;

pub use auth::JwtConfig;
pub use cache::CacheConfig;
pub use database::DatabaseConfig;
pub use gateway::GatewayConfig;
pub use queue::QueueConfig;
pub use server::ServerConfig;

use std::env;

/// Read an environment variable, falling back to a default.
pub(crate) fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default on
/// absence or parse failure.
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
