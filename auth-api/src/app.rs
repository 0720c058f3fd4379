//! Application factory
//!
//! Builds the actix-web application with middleware, routes, and shared
//! state; `main` wires the concrete MySQL/bcrypt implementations while the
//! integration tests inject mocks through the same factory.

use actix_web::body::MessageBody;
use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use td_core::repositories::{TokenRepository, UserRepository};
use td_core::services::auth::PasswordHasher;
use td_shared::types::ErrorResponse;

use crate::middleware::cors::create_cors;
use crate::routes::auth::{login, logout, refresh, register};
use crate::routes::health::health_check;
use crate::state::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<U, T, P>(
    app_state: web::Data<AppState<U, T, P>>,
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
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordHasher + 'static,
{
    App::new()
        .app_data(app_state)
        .wrap(TracingLogger::default())
        .wrap(create_cors())
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/auth")
                .route("/register", web::post().to(register::<U, T, P>))
                .route("/login", web::post().to(login::<U, T, P>))
                .route("/refresh", web::post().to(refresh::<U, T, P>))
                .route("/logout", web::post().to(logout::<U, T, P>)),
        )
        .default_service(web::route().to(not_found))
}

async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "The requested resource was not found",
    ))
}
