//! Handler for POST /api/auth/register

use actix_web::{web, HttpResponse};
use validator::Validate;

use td_core::repositories::{TokenRepository, UserRepository};
use td_core::services::auth::PasswordHasher;
use td_shared::types::MessageResponse;

use crate::dto::auth::RegisterRequest;
use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Registers a new account.
///
/// # Responses
/// - 200: `{message}`
/// - 400: validation errors, or `DUPLICATE_USER`
pub async fn register<U, T, P>(
    state: web::Data<AppState<U, T, P>>,
    request: web::Json<RegisterRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordHasher + 'static,
{
    if let Err(errors) = request.validate() {
        return HttpResponse::BadRequest().json(serde_json::json!({ "errors": errors }));
    }

    match state
        .auth_service
        .register(&request.username, &request.email, &request.password)
        .await
    {
        Ok(user) => HttpResponse::Ok().json(MessageResponse::new(format!(
            "User '{}' registered successfully",
            user.username
        ))),
        Err(error) => handle_domain_error(error),
    }
}
