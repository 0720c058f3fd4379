//! Handler for POST /api/auth/refresh

use actix_web::{web, HttpResponse};

use td_core::repositories::{TokenRepository, UserRepository};
use td_core::services::auth::PasswordHasher;

use crate::dto::auth::{RefreshRequest, RefreshResponse};
use crate::handlers::error::handle_domain_error;
use crate::state::AppState;

/// Rotates a refresh token into a new access token.
///
/// The old access token may be expired; its signature, issuer, and
/// audience must still verify. Each refresh token rotates at most once.
///
/// # Responses
/// - 200: `{token}` (plus `refreshToken` when chain renewal is enabled)
/// - 400: `UNKNOWN_TOKEN`, `TOKEN_ALREADY_USED`, `TOKEN_REVOKED`,
///   `TOKEN_EXPIRED`, `MALFORMED_ACCESS_TOKEN`, `SUBJECT_MISMATCH`,
///   `USER_NOT_FOUND`
pub async fn refresh<U, T, P>(
    state: web::Data<AppState<U, T, P>>,
    request: web::Json<RefreshRequest>,
) -> HttpResponse
where
    U: UserRepository + 'static,
    T: TokenRepository + 'static,
    P: PasswordHasher + 'static,
{
    match state
        .auth_service
        .refresh(&request.token, &request.refresh_token)
        .await
    {
        Ok(rotated) => HttpResponse::Ok().json(RefreshResponse {
            token: rotated.access_token,
            refresh_token: rotated.refresh_token,
        }),
        Err(error) => handle_domain_error(error),
    }
}
