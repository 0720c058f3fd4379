//! Handler for GET /api/task

use actix_web::{web, HttpResponse};

use td_core::repositories::TaskRepository;
use td_core::services::task::{EventPublisher, TaskCache};

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Lists all tasks, served through the read-through cache.
pub async fn list_tasks<R, C, E>(
    state: web::Data<AppState<R, C, E>>,
    _ctx: AuthContext,
) -> HttpResponse
where
    R: TaskRepository + 'static,
    C: TaskCache + 'static,
    E: EventPublisher + 'static,
{
    match state.task_service.list().await {
        Ok(tasks) => HttpResponse::Ok().json(tasks),
        Err(error) => handle_domain_error(error),
    }
}
