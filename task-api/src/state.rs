//! Application state shared by the route handlers.

use std::sync::Arc;

use td_core::repositories::TaskRepository;
use td_core::services::task::{EventPublisher, TaskCache, TaskService};
use td_core::services::token::TokenVerifier;

/// Shared state injected into every handler
pub struct AppState<R, C, E>
where
    R: TaskRepository,
    C: TaskCache,
    E: EventPublisher,
{
    pub task_service: Arc<TaskService<R, C, E>>,
    /// Verifier for bearer tokens issued by the auth service
    pub verifier: TokenVerifier,
}

impl<R, C, E> AppState<R, C, E>
where
    R: TaskRepository,
    C: TaskCache,
    E: EventPublisher,
{
    pub fn new(task_service: Arc<TaskService<R, C, E>>, verifier: TokenVerifier) -> Self {
        Self {
            task_service,
            verifier,
        }
    }
}
