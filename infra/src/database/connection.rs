//! MySQL connection pool construction.

use std::time::Duration;

use sqlx::mysql::MySqlPoolOptions;
use sqlx::MySqlPool;
use td_shared::config::DatabaseConfig;
use tracing::info;

use crate::InfrastructureError;

/// Build the shared connection pool.
///
/// The acquire timeout bounds every store call made through the pool, so a
/// saturated or unreachable database fails requests instead of hanging
/// them.
pub async fn connect_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
        .connect(&config.url)
        .await?;

    info!(
        max_connections = config.max_connections,
        "database pool ready"
    );
    Ok(pool)
}
