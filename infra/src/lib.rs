//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for TaskDeck, providing
//! concrete implementations for the collaborator traits defined in
//! `td_core`:
//!
//! - **Database**: MySQL repositories using SQLx
//! - **Cache**: Redis-backed task list cache
//! - **Queue**: RabbitMQ publisher and consumer for task events
//! - **Security**: bcrypt password hashing

pub mod cache;
pub mod database;
pub mod queue;
pub mod security;

use td_core::errors::DomainError;
use thiserror::Error;

/// Errors raised by infrastructure collaborators.
///
/// These are connectivity/timeout failures, not domain outcomes; crossing
/// into the domain layer they collapse into `DomainError::Internal`.
#[derive(Error, Debug)]
pub enum InfrastructureError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("cache error: {0}")]
    Cache(#[from] redis::RedisError),

    #[error("queue error: {0}")]
    Queue(#[from] lapin::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("operation timed out after {0}s")]
    Timeout(u64),
}

impl From<InfrastructureError> for DomainError {
    fn from(err: InfrastructureError) -> Self {
        DomainError::Internal {
            message: err.to_string(),
        }
    }
}
