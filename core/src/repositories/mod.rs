//! Repository interfaces and in-memory mock implementations.
//!
//! The traits define the persistence contract consumed by the services;
//! `td_infra` provides the MySQL implementations and the mocks here back
//! the test suites.

pub mod task;
pub mod token;
pub mod user;

pub use task::{MockTaskRepository, TaskRepository};
pub use token::{MockTokenRepository, TokenRepository};
pub use user::{MockUserRepository, UserRepository};
