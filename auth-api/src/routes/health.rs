//! Health check endpoint

use actix_web::HttpResponse;

pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "taskdeck-auth-api",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
