//! Main task service implementation

use std::sync::Arc;

use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::entities::task::{NewTask, TaskChanges, TaskItem};
use crate::domain::value_objects::TaskEvent;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::TaskRepository;

use super::cache::TaskCache;
use super::publisher::EventPublisher;

/// Task CRUD over the store, with a read-through list cache and event
/// publication on every mutation.
pub struct TaskService<R, C, E>
where
    R: TaskRepository,
    C: TaskCache,
    E: EventPublisher,
{
    /// Task repository; the authoritative store
    repository: Arc<R>,
    /// Read-through cache for the serialized task list
    cache: Arc<C>,
    /// Queue publisher for task mutation events
    publisher: Arc<E>,
}

impl<R, C, E> TaskService<R, C, E>
where
    R: TaskRepository,
    C: TaskCache,
    E: EventPublisher,
{
    pub fn new(repository: Arc<R>, cache: Arc<C>, publisher: Arc<E>) -> Self {
        Self {
            repository,
            cache,
            publisher,
        }
    }

    /// Lists all tasks through the cache.
    ///
    /// Cache failures (unavailable, or an entry that no longer parses)
    /// degrade to a store read; the store result repopulates the cache.
    pub async fn list(&self) -> DomainResult<Vec<TaskItem>> {
        match self.cache.fetch_task_list().await {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<TaskItem>>(&payload) {
                Ok(tasks) => {
                    debug!(count = tasks.len(), "task list served from cache");
                    return Ok(tasks);
                }
                Err(e) => {
                    warn!(error = %e, "cached task list is unreadable, dropping it");
                    let _ = self.cache.invalidate_task_list().await;
                }
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "task list cache read failed"),
        }

        let tasks = self.repository.list_all().await?;

        match serde_json::to_string(&tasks) {
            Ok(payload) => {
                if let Err(e) = self.cache.store_task_list(&payload).await {
                    warn!(error = %e, "task list cache write failed");
                }
            }
            Err(e) => warn!(error = %e, "task list serialization failed"),
        }

        Ok(tasks)
    }

    /// Creates a task owned by `user_id`
    pub async fn create(&self, task: NewTask) -> DomainResult<TaskItem> {
        let created = self.repository.insert(task).await?;
        self.post_write(TaskEvent::created(created.clone())).await;
        Ok(created)
    }

    /// Updates a task; only the creator may update it.
    ///
    /// A missing task and a foreign task both report `NotFound` so callers
    /// cannot probe other users' task ids.
    pub async fn update(
        &self,
        user_id: Uuid,
        task_id: i64,
        changes: TaskChanges,
    ) -> DomainResult<TaskItem> {
        let mut task = self
            .repository
            .find_by_id(task_id)
            .await?
            .filter(|t| t.user_id == user_id)
            .ok_or_else(|| DomainError::NotFound {
                resource: format!("task {task_id}"),
            })?;

        task.apply(changes);
        self.repository.update(&task).await?;

        self.post_write(TaskEvent::updated(task.clone())).await;
        Ok(task)
    }

    /// Deletes a task; only the creator may delete it
    pub async fn delete(&self, user_id: Uuid, task_id: i64) -> DomainResult<()> {
        let exists = self
            .repository
            .find_by_id(task_id)
            .await?
            .filter(|t| t.user_id == user_id)
            .is_some();
        if !exists {
            return Err(DomainError::NotFound {
                resource: format!("task {task_id}"),
            });
        }

        self.repository.delete(task_id).await?;

        self.post_write(TaskEvent::deleted(task_id)).await;
        Ok(())
    }

    /// Post-commit hooks for a completed store write.
    ///
    /// Invalidation and publication are independent and best-effort; the
    /// mutation has already succeeded, so failures are logged and
    /// swallowed rather than surfaced to the caller.
    async fn post_write(&self, event: TaskEvent) {
        if let Err(e) = self.cache.invalidate_task_list().await {
            warn!(error = %e, "task list invalidation failed");
        }

        if let Err(e) = self.publisher.publish(&event).await {
            warn!(error = %e, event_type = ?event.event_type, "task event publish failed");
        }
    }
}
