//! TaskDeck API gateway
//!
//! Thin request forwarder: `/api/auth/*` goes to the auth service,
//! `/api/task/*` to the task service; everything else is 404. Method,
//! path, query, body, and the Authorization header pass through untouched.

use std::time::Duration;

use actix_web::http::header;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use tracing::{error, info};
use tracing_actix_web::TracingLogger;
use tracing_subscriber::EnvFilter;

use td_shared::config::{GatewayConfig, ServerConfig};
use td_shared::types::ErrorResponse;

struct GatewayState {
    client: reqwest::Client,
    config: GatewayConfig,
}

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting TaskDeck API gateway");

    let config = GatewayConfig::from_env();
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .build()?;

    info!(
        auth = %config.auth_service_url,
        task = %config.task_service_url,
        "upstream routes configured"
    );

    let state = web::Data::new(GatewayState { client, config });

    let server_config = ServerConfig::from_env(8080);
    let bind_address = server_config.bind_address();
    info!(%bind_address, "gateway listening");

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            .wrap(TracingLogger::default())
            .route("/health", web::get().to(health_check))
            .default_service(web::route().to(forward))
    })
    .bind(&bind_address)?
    .run()
    .await?;

    Ok(())
}

async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "taskdeck-gateway",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

/// Forward one request to the upstream selected by path prefix
async fn forward(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<GatewayState>,
) -> HttpResponse {
    let path = req.uri().path();

    let upstream = if path.starts_with("/api/auth") {
        &state.config.auth_service_url
    } else if path.starts_with("/api/task") {
        &state.config.task_service_url
    } else {
        return HttpResponse::NotFound().json(ErrorResponse::new(
            "NOT_FOUND",
            "No route for the requested path",
        ));
    };

    let mut url = format!("{upstream}{path}");
    if let Some(query) = req.uri().query() {
        url.push('?');
        url.push_str(query);
    }

    let mut upstream_req = state
        .client
        .request(req.method().clone(), &url)
        .body(body.to_vec());
    for name in [header::AUTHORIZATION, header::CONTENT_TYPE] {
        if let Some(value) = req.headers().get(&name) {
            upstream_req = upstream_req.header(name.clone(), value.clone());
        }
    }

    match upstream_req.send().await {
        Ok(upstream_resp) => {
            let status = upstream_resp.status();
            let content_type = upstream_resp.headers().get(header::CONTENT_TYPE).cloned();
            let bytes = upstream_resp.bytes().await.unwrap_or_default();

            let mut response = HttpResponse::build(status);
            if let Some(content_type) = content_type {
                response.insert_header((header::CONTENT_TYPE, content_type));
            }
            response.body(bytes)
        }
        Err(e) => {
            error!(error = %e, %url, "upstream request failed");
            HttpResponse::BadGateway().json(ErrorResponse::new(
                "UPSTREAM_UNAVAILABLE",
                "The upstream service could not be reached",
            ))
        }
    }
}
