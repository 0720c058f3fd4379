//! HTTP server configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: String::from("127.0.0.1"),
            port: 8080,
        }
    }
}

impl ServerConfig {
    /// Create a new server configuration
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Build the configuration from `SERVER_*` environment variables.
    ///
    /// Each service passes its own default port so the binaries can share a
    /// machine without explicit configuration.
    pub fn from_env(default_port: u16) -> Self {
        Self {
            host: env_or("SERVER_HOST", "127.0.0.1"),
            port: env_parse_or("SERVER_PORT", default_port),
        }
    }

    /// Get the bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_joins_host_and_port() {
        let config = ServerConfig::new("0.0.0.0", 9000);
        assert_eq!(config.bind_address(), "0.0.0.0:9000");
    }
}
