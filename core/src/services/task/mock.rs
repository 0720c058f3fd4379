//! Mock cache and publisher implementations for testing

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::value_objects::TaskEvent;
use crate::errors::DomainError;

use super::cache::TaskCache;
use super::publisher::EventPublisher;

/// In-memory single-entry cache for tests.
///
/// `set_unavailable` makes every operation fail, simulating an unreachable
/// cache so best-effort semantics can be asserted.
#[derive(Clone, Default)]
pub struct MockTaskCache {
    entry: Arc<RwLock<Option<String>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockTaskCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Current cached payload, if any
    pub async fn entry(&self) -> Option<String> {
        self.entry.read().await.clone()
    }

    fn check_available(&self) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "cache unavailable".to_string(),
            });
        }
        Ok(())
    }
}

#[async_trait]
impl TaskCache for MockTaskCache {
    async fn fetch_task_list(&self) -> Result<Option<String>, DomainError> {
        self.check_available()?;
        Ok(self.entry.read().await.clone())
    }

    async fn store_task_list(&self, payload: &str) -> Result<(), DomainError> {
        self.check_available()?;
        *self.entry.write().await = Some(payload.to_string());
        Ok(())
    }

    async fn invalidate_task_list(&self) -> Result<(), DomainError> {
        self.check_available()?;
        *self.entry.write().await = None;
        Ok(())
    }
}

/// Recording publisher for tests
#[derive(Clone, Default)]
pub struct MockEventPublisher {
    events: Arc<RwLock<Vec<TaskEvent>>>,
    unavailable: Arc<AtomicBool>,
}

impl MockEventPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Events published so far
    pub async fn published(&self) -> Vec<TaskEvent> {
        self.events.read().await.clone()
    }
}

#[async_trait]
impl EventPublisher for MockEventPublisher {
    async fn publish(&self, event: &TaskEvent) -> Result<(), DomainError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(DomainError::Internal {
                message: "queue unavailable".to_string(),
            });
        }
        self.events.write().await.push(event.clone());
        Ok(())
    }
}
