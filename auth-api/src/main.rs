use std::sync::Arc;
use std::time::Duration;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use td_auth_api::{create_app, AppState};
use td_core::services::auth::AuthService;
use td_core::services::token::TokenService;
use td_infra::database::{connect_pool, MySqlTokenRepository, MySqlUserRepository};
use td_infra::security::BcryptPasswordHasher;
use td_shared::config::{DatabaseConfig, JwtConfig, ServerConfig};

/// Interval for the expired refresh token sweep (storage hygiene; lazy
/// expiry checks keep rotation correct without it)
const TOKEN_CLEANUP_INTERVAL_SECS: u64 = 3600;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting TaskDeck auth service");

    let jwt_config = JwtConfig::from_env();
    if jwt_config.is_using_default_secret() {
        warn!("JWT_SECRET not set; using the development default");
    }

    let pool = connect_pool(&DatabaseConfig::from_env()).await?;

    let user_repository = Arc::new(MySqlUserRepository::new(pool.clone()));
    let token_repository = Arc::new(MySqlTokenRepository::new(pool));
    let token_service = Arc::new(TokenService::new(token_repository, jwt_config));
    let auth_service = Arc::new(AuthService::new(
        user_repository,
        token_service.clone(),
        Arc::new(BcryptPasswordHasher::new()),
    ));

    spawn_token_cleanup(token_service);

    let server_config = ServerConfig::from_env(8081);
    let bind_address = server_config.bind_address();
    info!(%bind_address, "auth service listening");

    let state = web::Data::new(AppState::new(auth_service));
    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}

/// Periodically delete expired refresh token records
fn spawn_token_cleanup(token_service: Arc<TokenService<MySqlTokenRepository>>) {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(TOKEN_CLEANUP_INTERVAL_SECS));
        // The first tick fires immediately; skip it so startup stays quiet
        interval.tick().await;

        loop {
            interval.tick().await;
            match token_service.cleanup_expired_tokens().await {
                Ok(0) => {}
                Ok(removed) => info!(removed, "expired refresh tokens deleted"),
                Err(e) => warn!(error = %e, "refresh token cleanup failed"),
            }
        }
    });
}
