//! Mock implementation of TaskRepository for testing

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::entities::task::{NewTask, TaskItem};
use crate::errors::DomainError;

use super::r#trait::TaskRepository;

/// In-memory task repository for tests.
///
/// Counts `list_all` calls so cache read-through behavior can be asserted
/// against an explicit store-call counter.
#[derive(Clone, Default)]
pub struct MockTaskRepository {
    tasks: Arc<RwLock<BTreeMap<i64, TaskItem>>>,
    next_id: Arc<AtomicI64>,
    list_calls: Arc<AtomicUsize>,
}

impl MockTaskRepository {
    pub fn new() -> Self {
        Self {
            tasks: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(AtomicI64::new(1)),
            list_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Number of times `list_all` hit the store
    pub fn list_call_count(&self) -> usize {
        self.list_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TaskRepository for MockTaskRepository {
    async fn insert(&self, task: NewTask) -> Result<TaskItem, DomainError> {
        let now = Utc::now();
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let item = TaskItem {
            id,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            is_completed: task.is_completed,
            created_at: now,
            updated_at: now,
        };

        self.tasks.write().await.insert(id, item.clone());
        Ok(item)
    }

    async fn list_all(&self) -> Result<Vec<TaskItem>, DomainError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        let tasks = self.tasks.read().await;
        Ok(tasks.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TaskItem>, DomainError> {
        let tasks = self.tasks.read().await;
        Ok(tasks.get(&id).cloned())
    }

    async fn update(&self, task: &TaskItem) -> Result<(), DomainError> {
        let mut tasks = self.tasks.write().await;
        match tasks.get_mut(&task.id) {
            Some(existing) => {
                *existing = task.clone();
                Ok(())
            }
            None => Err(DomainError::NotFound {
                resource: format!("task {}", task.id),
            }),
        }
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let mut tasks = self.tasks.write().await;
        Ok(tasks.remove(&id).is_some())
    }
}
