//! Authentication and token configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// JWT authentication configuration
///
/// Secret, issuer, and audience are deployment configuration; the expiry
/// windows default to the contract values (3-hour access tokens, 7-day
/// refresh tokens).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Symmetric secret for HMAC-SHA256 signing
    pub secret: String,

    /// JWT issuer claim
    pub issuer: String,

    /// JWT audience claim
    pub audience: String,

    /// Access token expiry in hours
    pub access_token_expiry_hours: i64,

    /// Refresh token expiry in days
    pub refresh_token_expiry_days: i64,

    /// Whether a successful rotation also issues a fresh refresh token.
    ///
    /// Off by default: a refresh token is good for exactly one rotation and
    /// the client re-authenticates once its chain is spent.
    pub rotate_refresh_tokens: bool,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from("development-secret-change-in-production"),
            issuer: String::from("taskdeck-auth"),
            audience: String::from("taskdeck-api"),
            access_token_expiry_hours: 3,
            refresh_token_expiry_days: 7,
            rotate_refresh_tokens: false,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with an explicit secret
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            ..Default::default()
        }
    }

    /// Build the configuration from `JWT_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            secret: env_or("JWT_SECRET", &defaults.secret),
            issuer: env_or("JWT_ISSUER", &defaults.issuer),
            audience: env_or("JWT_AUDIENCE", &defaults.audience),
            access_token_expiry_hours: env_parse_or(
                "JWT_ACCESS_EXPIRY_HOURS",
                defaults.access_token_expiry_hours,
            ),
            refresh_token_expiry_days: env_parse_or(
                "JWT_REFRESH_EXPIRY_DAYS",
                defaults.refresh_token_expiry_days,
            ),
            rotate_refresh_tokens: env_parse_or(
                "JWT_ROTATE_REFRESH_TOKENS",
                defaults.rotate_refresh_tokens,
            ),
        }
    }

    /// Enable refresh-token chain renewal on rotation
    pub fn with_refresh_rotation(mut self) -> Self {
        self.rotate_refresh_tokens = true;
        self
    }

    /// Check if the default development secret is still in use
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == JwtConfig::default().secret
    }
}
