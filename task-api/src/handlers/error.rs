//! Domain error to HTTP response mapping.

use actix_web::HttpResponse;
use tracing::error;

use td_core::errors::DomainError;
use td_shared::types::ErrorResponse;

/// Map a domain error onto the wire.
///
/// Store failures are fatal to the request (opaque 500, logged); missing
/// or foreign tasks are 404s; token errors are 401s, though in practice the
/// middleware rejects those before a handler runs.
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
        DomainError::NotFound { .. } => HttpResponse::NotFound().json(body),
        DomainError::Token(_) => HttpResponse::Unauthorized().json(body),
        _ => HttpResponse::BadRequest().json(body),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn not_found_is_404() {
        let response = handle_domain_error(DomainError::NotFound {
            resource: "task 7".into(),
        });
        assert_eq!(response.status(), 404);
    }

    #[test]
    fn store_failures_are_opaque_500s() {
        let response = handle_domain_error(DomainError::Internal {
            message: "pool timed out".into(),
        });
        assert_eq!(response.status(), 500);
    }
}
