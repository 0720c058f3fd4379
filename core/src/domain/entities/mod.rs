//! Domain entities

pub mod task;
pub mod token;
pub mod user;

pub use task::{NewTask, TaskChanges, TaskItem};
pub use token::{Claims, RefreshToken, RotatedTokens, TokenPair};
pub use user::User;
