//! Task event publication interface.

use async_trait::async_trait;

use crate::domain::value_objects::TaskEvent;
use crate::errors::DomainError;

/// Fire-and-forget publisher for task mutation events.
///
/// Publication is best-effort: callers log failures and move on, so
/// implementations must not retry indefinitely or block without bound.
#[async_trait]
pub trait EventPublisher: Send + Sync {
    /// Publish one event
    async fn publish(&self, event: &TaskEvent) -> Result<(), DomainError>;
}
