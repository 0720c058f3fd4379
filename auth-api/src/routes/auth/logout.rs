//! Handler for POST /api/auth/logout

use actix_web::{web, HttpResponse};

use td_core::repositories::{TokenRepository, UserRepository};
use td_core::services::auth::PasswordHasher;
use td_shared::types::MessageResponse;

use crate::dto::auth::LogoutRequest;
use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Revokes a refresh token, ending its chain.
///
/// Revoking an unknown or already-inert token succeeds; logout is
/// idempotent from the client's point of view.
pub async fn logout<U, T, P>(
    state: web::Data<AppState<U, T, P>>,
    request: web::Json<LogoutRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordHasher + 'static,
{
    match state.auth_service.logout(&request.refresh_token).await {
        Ok(_) => HttpResponse::Ok().json(MessageResponse::new("Logged out")),
        Err(error) => handle_domain_error(error),
    }
}
