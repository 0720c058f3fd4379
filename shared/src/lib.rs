//! Shared utilities and common types for TaskDeck services
//!
//! This crate provides common functionality used across all TaskDeck crates:
//! - Configuration types with environment-based constructors
//! - Common response structures

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{
    CacheConfig, DatabaseConfig, GatewayConfig, JwtConfig, QueueConfig, ServerConfig,
};
pub use types::{ErrorResponse, MessageResponse};
