//! CORS middleware configuration.

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Creates a CORS middleware instance configured for the current
/// environment; development allows any origin, production restricts to
/// `ALLOWED_ORIGINS`.
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .max_age(3600);

    if environment == "production" {
        let allowed = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        allowed
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    } else {
        cors.allow_any_origin()
    }
}
