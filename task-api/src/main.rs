use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use td_core::services::task::TaskService;
use td_core::services::token::TokenVerifier;
use td_infra::cache::{RedisClient, RedisTaskCache};
use td_infra::database::{connect_pool, MySqlTaskRepository};
use td_infra::queue::RabbitMqPublisher;
use td_shared::config::{CacheConfig, DatabaseConfig, JwtConfig, QueueConfig, ServerConfig};
use td_task_api::{create_app, AppState};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting TaskDeck task service");

    let jwt_config = JwtConfig::from_env();
    if jwt_config.is_using_default_secret() {
        warn!("JWT_SECRET not set; using the development default");
    }
    let verifier = TokenVerifier::new(&jwt_config);

    let pool = connect_pool(&DatabaseConfig::from_env()).await?;
    let repository = Arc::new(MySqlTaskRepository::new(pool));

    let cache_config = CacheConfig::from_env();
    let redis = RedisClient::connect(&cache_config).await?;
    let cache = Arc::new(RedisTaskCache::new(redis, &cache_config));

    let publisher = Arc::new(RabbitMqPublisher::connect(&QueueConfig::from_env()).await?);

    let task_service = Arc::new(TaskService::new(repository, cache, publisher));

    let server_config = ServerConfig::from_env(8082);
    let bind_address = server_config.bind_address();
    info!(%bind_address, "task service listening");

    let state = web::Data::new(AppState::new(task_service, verifier));
    HttpServer::new(move || create_app(state.clone()))
        .bind(&bind_address)?
        .run()
        .await?;

    Ok(())
}
