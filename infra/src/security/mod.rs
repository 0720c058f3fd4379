//! Security module - password hashing

pub mod password;

pub use password::BcryptPasswordHasher;
