//! Database module - MySQL implementations using SQLx
//!
//! This module provides the database access layer:
//! - Connection pool management
//! - Repository pattern implementations

pub mod connection;
pub mod mysql;

pub use connection::connect_pool;
pub use mysql::{MySqlTaskRepository, MySqlTokenRepository, MySqlUserRepository};
