//! Token entities for JWT-based authentication.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::User;

/// Access token expiration time (3 hours)
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 3;

/// Refresh token expiration time (7 days)
pub const REFRESH_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Size of the random refresh token material in bytes
pub const REFRESH_TOKEN_BYTES: usize = 32;

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,

    /// Email of the subject
    pub email: String,

    /// Roles granted to the subject
    pub roles: Vec<String>,

    /// JWT ID (unique identifier for this token instance)
    pub jti: String,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,
}

impl Claims {
    /// Creates access token claims for a user with a fresh `jti`
    pub fn new_access_token(
        user: &User,
        issuer: impl Into<String>,
        audience: impl Into<String>,
        expiry_hours: i64,
    ) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::hours(expiry_hours);

        Self {
            sub: user.id.to_string(),
            email: user.email.clone(),
            roles: user.roles.clone(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            iss: issuer.into(),
            aud: audience.into(),
        }
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }

    /// Gets the user ID from the subject claim
    pub fn user_id(&self) -> Result<Uuid, uuid::Error> {
        Uuid::parse_str(&self.sub)
    }
}

/// Refresh token record as persisted in the database.
///
/// The opaque value handed to the client is never stored; only its SHA-256
/// hash is. Records are flagged used/revoked rather than deleted so the
/// chain remains auditable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshToken {
    /// Unique identifier for the refresh token record
    pub id: Uuid,

    /// User this token belongs to
    pub user_id: Uuid,

    /// Hashed token value
    pub token_hash: String,

    /// `jti` of the access token issued alongside this refresh token
    pub jwt_id: String,

    /// Timestamp when the token was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the token expires
    pub expires_at: DateTime<Utc>,

    /// Whether the token has been spent in a rotation
    pub is_used: bool,

    /// Whether the token has been explicitly revoked
    pub is_revoked: bool,
}

impl RefreshToken {
    /// Creates a new refresh token record
    pub fn new(user_id: Uuid, token_hash: String, jwt_id: String, expiry_days: i64) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            user_id,
            token_hash,
            jwt_id,
            created_at: now,
            expires_at: now + Duration::days(expiry_days),
            is_used: false,
            is_revoked: false,
        }
    }

    /// Checks if the refresh token has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// A token is active while it is unused, unrevoked, and unexpired
    pub fn is_active(&self) -> bool {
        !self.is_used && !self.is_revoked && !self.is_expired()
    }

    /// Marks the token as spent; terminal
    pub fn mark_used(&mut self) {
        self.is_used = true;
    }

    /// Revokes the token; terminal
    pub fn revoke(&mut self) {
        self.is_revoked = true;
    }
}

/// Token pair returned by login
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Signed JWT access token
    pub access_token: String,

    /// Opaque refresh token value
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

/// Result of a successful rotation.
///
/// `refresh_token` is present only when chain renewal is enabled in the
/// token configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotatedTokens {
    /// Newly issued access token
    pub access_token: String,

    /// Newly issued refresh token, when rotation re-issues one
    pub refresh_token: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new("alice", "alice@x.com", "hash")
    }

    #[test]
    fn access_token_claims_carry_subject_and_roles() {
        let user = sample_user();
        let claims = Claims::new_access_token(&user, "taskdeck-auth", "taskdeck-api", 3);

        assert_eq!(claims.sub, user.id.to_string());
        assert_eq!(claims.email, user.email);
        assert_eq!(claims.roles, user.roles);
        assert_eq!(claims.iss, "taskdeck-auth");
        assert_eq!(claims.aud, "taskdeck-api");
        assert!(!claims.is_expired());
        assert_eq!(claims.exp - claims.iat, 3 * 3600);
    }

    #[test]
    fn claims_subject_parses_back_to_user_id() {
        let user = sample_user();
        let claims = Claims::new_access_token(&user, "iss", "aud", 3);

        assert_eq!(claims.user_id().unwrap(), user.id);
    }

    #[test]
    fn fresh_jti_per_token() {
        let user = sample_user();
        let a = Claims::new_access_token(&user, "iss", "aud", 3);
        let b = Claims::new_access_token(&user, "iss", "aud", 3);

        assert_ne!(a.jti, b.jti);
    }

    #[test]
    fn new_refresh_token_is_active() {
        let token = RefreshToken::new(Uuid::new_v4(), "hash".into(), "jti".into(), 7);

        assert!(!token.is_used);
        assert!(!token.is_revoked);
        assert!(!token.is_expired());
        assert!(token.is_active());
    }

    #[test]
    fn used_token_is_inert() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".into(), "jti".into(), 7);
        token.mark_used();

        assert!(token.is_used);
        assert!(!token.is_active());
    }

    #[test]
    fn revoked_token_is_inert() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".into(), "jti".into(), 7);
        token.revoke();

        assert!(token.is_revoked);
        assert!(!token.is_active());
    }

    #[test]
    fn expired_token_is_inert() {
        let mut token = RefreshToken::new(Uuid::new_v4(), "hash".into(), "jti".into(), 7);
        token.expires_at = Utc::now() - Duration::days(1);

        assert!(token.is_expired());
        assert!(!token.is_active());
    }
}
