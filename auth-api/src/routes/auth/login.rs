//! Handler for POST /api/auth/login

use actix_web::{web, HttpResponse};

use td_core::repositories::{TokenRepository, UserRepository};
use td_core::services::auth::PasswordHasher;

use crate::dto::auth::{LoginRequest, LoginResponse};
use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Authenticates a user and issues a token pair.
///
/// # Responses
/// - 200: `{token, refreshToken}`
/// - 401: `INVALID_CREDENTIALS` (never distinguishes unknown email from
///   wrong password)
pub async fn login<U, T, P>(
    state: web::Data<AppState<U, T, P>>,
    request: web::Json<LoginRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordHasher + 'static,
{
    match state
        .auth_service
        .login(&request.email, &request.password)
        .await
    {
        Ok(pair) => HttpResponse::Ok().json(LoginResponse {
            token: pair.access_token,
            refresh_token: pair.refresh_token,
        }),
        Err(error) => handle_domain_error(error),
    }
}
