//! Handler for POST /api/task

use actix_web::{web, HttpResponse};
use validator::Validate;

use td_core::domain::entities::task::NewTask;
use td_core::repositories::TaskRepository;
use td_core::services::task::{EventPublisher, TaskCache};

use crate::dto::task::TaskRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Creates a task owned by the authenticated user.
///
/// The store write is authoritative; cache invalidation and the
/// `TaskCreated` event are best-effort side effects.
pub async fn create_task<R, C, E>(
    state: web::Data<AppState<R, C, E>>,
    ctx: AuthContext,
    request: web::Json<TaskRequest>,
) -> HttpResponse
where
    R: TaskRepository + 'static,
    C: TaskCache + 'static,
    E: EventPublisher + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }));
    }

    let request = request.into_inner();
    let task = NewTask::new(
        ctx.user_id,
        request.title,
        request.description,
        request.is_completed,
    );

    match state.task_service.create(task).await {
        Ok(created) => HttpResponse::Created().json(created),
        Err(error) => handle_domain_error(error),
    }
}
