//! Task repository interface and mock

mod mock;
mod r#trait;

pub use mock::MockTaskRepository;
pub use r#trait::TaskRepository;
