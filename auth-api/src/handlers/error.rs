//! Domain error to HTTP response mapping.

use actix_web::HttpResponse;
use tracing::error;

use td_core::errors::{AuthError, DomainError};
use td_shared::types::ErrorResponse;

/// Map a domain error onto the wire.
///
/// Every auth/token failure is a 4xx with its stable code; infrastructure
/// failures are logged server-side and surface as an opaque 500.
pub fn handle_domain_error(err: DomainError) -> HttpResponse {
    if err.is_internal() {
        error!(error = %err, "request failed on infrastructure error");
        return HttpResponse::InternalServerError().json(ErrorResponse::new(
            "INTERNAL_ERROR",
            "An internal error occurred",
        ));
    }

    let body = ErrorResponse::new(err.error_code(), err.to_string());
    match &err {
        DomainError::Auth(AuthError::InvalidCredentials) => {
            HttpResponse::Unauthorized().json(body)
        }
        DomainError::NotFound { .. } => HttpResponse::NotFound().json(body),
        // Registration conflicts and the whole rotation ladder are client
        // errors with stable codes
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use td_core::errors::TokenError;

    #[test]
    fn invalid_credentials_is_401() {
        let response = handle_domain_error(AuthError::InvalidCredentials.into());
        assert_eq!(response.status(), 401);
    }

    #[test]
    fn rotation_failures_are_400() {
        for err in [
            TokenError::UnknownToken,
            TokenError::TokenAlreadyUsed,
            TokenError::TokenRevoked,
            TokenError::TokenExpired,
            TokenError::MalformedAccessToken,
            TokenError::SubjectMismatch,
        ] {
            let response = handle_domain_error(err.into());
            assert_eq!(response.status(), 400);
        }
    }

    #[test]
    fn infrastructure_failures_are_opaque_500s() {
        let response = handle_domain_error(DomainError::Internal {
            message: "connection refused".into(),
        });
        assert_eq!(response.status(), 500);
    }
}
