//! Gateway routing configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// Upstream service addresses for the API gateway
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GatewayConfig {
    /// Base URL of the auth service
    pub auth_service_url: String,

    /// Base URL of the task service
    pub task_service_url: String,

    /// Upstream request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            auth_service_url: String::from("http://127.0.0.1:8081"),
            task_service_url: String::from("http://127.0.0.1:8082"),
            request_timeout_secs: 30,
        }
    }
}

impl GatewayConfig {
    /// Build the configuration from `GATEWAY_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            auth_service_url: env_or("GATEWAY_AUTH_SERVICE_URL", &defaults.auth_service_url),
            task_service_url: env_or("GATEWAY_TASK_SERVICE_URL", &defaults.task_service_url),
            request_timeout_secs: env_parse_or(
                "GATEWAY_REQUEST_TIMEOUT_SECS",
                defaults.request_timeout_secs,
            ),
        }
    }
}
