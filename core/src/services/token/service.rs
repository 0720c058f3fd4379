//! Main token service implementation

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use jsonwebtoken::{encode, EncodingKey, Header};
use rand::RngCore;
use sha2::{Digest, Sha256};
use td_shared::config::JwtConfig;
use tracing::debug;
use uuid::Uuid;

use crate::domain::entities::token::{Claims, RefreshToken, REFRESH_TOKEN_BYTES};
use crate::domain::entities::user::User;
use crate::errors::{DomainError, TokenError};
use crate::repositories::TokenRepository;

use super::verifier::TokenVerifier;

/// Service owning the access/refresh token lifecycle.
///
/// Access tokens are stateless HMAC-SHA256 JWTs; refresh tokens are opaque
/// random values persisted (hashed) through the repository. A refresh token
/// moves `Active → Used` exactly once, or `Active → Revoked`, and either
/// state is terminal.
pub struct TokenService<R: TokenRepository> {
    repository: Arc<R>,
    config: JwtConfig,
    encoding_key: EncodingKey,
    verifier: TokenVerifier,
}

impl<R: TokenRepository> TokenService<R> {
    pub fn new(repository: Arc<R>, config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let verifier = TokenVerifier::new(&config);

        Self {
            repository,
            config,
            encoding_key,
            verifier,
        }
    }

    /// Shared stateless verifier for this deployment's key material
    pub fn verifier(&self) -> &TokenVerifier {
        &self.verifier
    }

    /// Whether rotation re-issues a refresh token (chain renewal)
    pub fn rotation_renews_refresh_token(&self) -> bool {
        self.config.rotate_refresh_tokens
    }

    /// Issues a signed access token for a user.
    ///
    /// # Returns
    ///
    /// The encoded token and its `jti`, so callers can link a refresh token
    /// to this exact instance. No side effects beyond construction.
    pub fn issue_access_token(&self, user: &User) -> Result<(String, String), DomainError> {
        let claims = Claims::new_access_token(
            user,
            &self.config.issuer,
            &self.config.audience,
            self.config.access_token_expiry_hours,
        );
        let jti = claims.jti.clone();

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok((token, jti))
    }

    /// Issues a refresh token for a user and persists its record.
    ///
    /// The raw value is 32 cryptographically random bytes, base64-encoded;
    /// only its SHA-256 hash is written to the store, linked to the access
    /// token's `jti`.
    pub async fn issue_refresh_token(
        &self,
        user_id: Uuid,
        jwt_id: &str,
    ) -> Result<String, DomainError> {
        let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
        rand::thread_rng().fill_bytes(&mut bytes);
        let raw = BASE64.encode(bytes);

        let record = RefreshToken::new(
            user_id,
            Self::hash_token(&raw),
            jwt_id.to_string(),
            self.config.refresh_token_expiry_days,
        );
        self.repository.save(record).await?;

        Ok(raw)
    }

    /// Verifies an access token and returns the claims
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        self.verifier.verify(token)
    }

    /// Consumes a refresh token for rotation, spending it permanently.
    ///
    /// Checks run in a fixed order so each failure is attributable:
    /// lookup, used flag, revoked flag, expiry, old-access-token signature
    /// (expiry ignored), subject match, then the atomic mark-used. Losing
    /// the mark-used race to a concurrent rotation reports
    /// `TokenAlreadyUsed` just like a sequential replay.
    ///
    /// # Returns
    ///
    /// The spent record; the caller issues the replacement access token for
    /// its `user_id`.
    pub async fn consume_refresh_token(
        &self,
        old_access_token: &str,
        raw_refresh_token: &str,
    ) -> Result<RefreshToken, DomainError> {
        let token_hash = Self::hash_token(raw_refresh_token);

        let stored = self
            .repository
            .find_by_hash(&token_hash)
            .await?
            .ok_or(DomainError::Token(TokenError::UnknownToken))?;

        if stored.is_used {
            return Err(TokenError::TokenAlreadyUsed.into());
        }
        if stored.is_revoked {
            return Err(TokenError::TokenRevoked.into());
        }
        if stored.is_expired() {
            return Err(TokenError::TokenExpired.into());
        }

        let claims = self.verifier.decode_expired(old_access_token)?;
        let subject = claims
            .user_id()
            .map_err(|_| DomainError::Token(TokenError::MalformedAccessToken))?;
        if subject != stored.user_id {
            return Err(TokenError::SubjectMismatch.into());
        }

        if !self.repository.mark_used(&token_hash).await? {
            return Err(TokenError::TokenAlreadyUsed.into());
        }

        debug!(user_id = %stored.user_id, "refresh token consumed");
        Ok(stored)
    }

    /// Revokes a refresh token by raw value; terminal for the token
    pub async fn revoke_refresh_token(&self, raw_refresh_token: &str) -> Result<bool, DomainError> {
        let token_hash = Self::hash_token(raw_refresh_token);
        self.repository.revoke(&token_hash).await
    }

    /// Removes expired refresh token records from storage
    pub async fn cleanup_expired_tokens(&self) -> Result<usize, DomainError> {
        self.repository.delete_expired().await
    }

    /// Hashes a refresh token value for storage and lookup
    pub(crate) fn hash_token(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        format!("{:x}", hasher.finalize())
    }
}
