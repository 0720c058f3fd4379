//! Handler for PUT /api/task/{id}

use actix_web::{web, HttpResponse};
use validator::Validate;

use td_core::repositories::TaskRepository;
use td_core::services::task::{EventPublisher, TaskCache};

use crate::dto::task::TaskRequest;
use crate::handlers::error::handle_domain_error;
use crate::middleware::AuthContext;
use crate::state::AppState;

/// Updates a task owned by the authenticated user.
///
/// A task belonging to someone else reports 404, not 403, so ids cannot be
/// probed.
pub async fn update_task<R, C, E>(
    state: web::Data<AppState<R, C, E>>,
    ctx: AuthContext,
    path: web::Path<i64>,
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

    let task_id = path.into_inner();
    match state
        .task_service
        .update(ctx.user_id, task_id, request.into_inner().into())
        .await
    {
        Ok(_) => HttpResponse::NoContent().finish(),
        Err(error) => handle_domain_error(error),
    }
}
