//! Handler for DELETE /api/task/{id}

use actix_web::{web, HttpResponse};

use td_core::repositories::TaskRepository;
use td_core::services::task::{EventPublisher, TaskCache};

use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Deletes a task owned by the authenticated user.
pub async fn delete_task<R, C, E>(
    state: web::Data<AppState<R, C, E>>,
    ctx: AuthContext,
    path: web::Path<i64>,
) -> HttpResponse
where
    R: TaskRepository + 'static,
    C: TaskCache + 'static,
    E: EventPublisher + 'static,
{
    match state
        .task_service
        .delete(ctx.user_id, path.into_inner())
        .await
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
