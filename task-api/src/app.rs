//! Application factory

use actix_web::body::MessageBody;
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use td_core::repositories::TaskRepository;
use td_core::services::task::{EventPublisher, TaskCache};
use td_shared::types::ErrorResponse;

use crate::middleware::cors::create_cors;
use crate::middleware::JwtAuth;
use crate::routes::health::health_check;
use crate::routes::task::{create_task, delete_task, list_tasks, update_task};
use crate::state::AppState;

/// Create and configure the application with all dependencies.
///
/// Every `/api/task` route sits behind the JWT middleware; the verifier
/// comes from the shared state so tests and production wire the same way.
pub fn create_app<R, C, E>(
    app_state: web::Data<AppState<R, C, E>>,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    R: TaskRepository + 'static,
    C: TaskCache + 'static,
    E: EventPublisher + 'static,
{
    let auth = JwtAuth::new(app_state.verifier.clone());

    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/task")
                .wrap(auth)
                .route("", web::get().to(list_tasks::<R, C, E>))
                .route("", web::post().to(create_task::<R, C, E>))
                .route("/{id}", web::put().to(update_task::<R, C, E>))
                .route("/{id}", web::delete().to(delete_task::<R, C, E>)),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
