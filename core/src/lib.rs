//! # TaskDeck Core
//!
//! Core business logic and domain layer for the TaskDeck backend.
//! This crate contains domain entities, business services, repository
//! interfaces, and error types that form the foundation of the application
//! architecture. Infrastructure concerns (MySQL, Redis, RabbitMQ, bcrypt)
//! live behind the traits defined here and are implemented in `td_infra`.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export the error umbrella for convenience
pub use errors::{DomainError, DomainResult};
