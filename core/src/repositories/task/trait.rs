//! Task repository trait defining the interface for task persistence.

use async_trait::async_trait;

use crate::domain::entities::task::{NewTask, TaskItem};
use crate::errors::DomainError;

/// Repository trait for TaskItem persistence operations
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Insert a new task and return it with the store-assigned id
    async fn insert(&self, task: NewTask) -> Result<TaskItem, DomainError>;

    /// List every task, oldest first
    async fn list_all(&self) -> Result<Vec<TaskItem>, DomainError>;

    /// Find a task by id
    async fn find_by_id(&self, id: i64) -> Result<Option<TaskItem>, DomainError>;

    /// Persist an updated task
    async fn update(&self, task: &TaskItem) -> Result<(), DomainError>;

    /// Delete a task; false when no such task existed
    async fn delete(&self, id: i64) -> Result<bool, DomainError>;
}
