//! MySQL implementation of the TokenRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use td_core::domain::entities::token::RefreshToken;
use td_core::errors::DomainError;
use td_core::repositories::TokenRepository;

/// MySQL implementation of TokenRepository
///
/// Records are keyed by the SHA-256 hash of the token value; the raw value
/// never reaches this layer.
pub struct MySqlTokenRepository {
    pool: MySqlPool,
}

impl MySqlTokenRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_token(row: &sqlx::mysql::MySqlRow) -> Result<RefreshToken, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(RefreshToken {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid token UUID: {}", e) })?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            token_hash: row.try_get("token_hash").map_err(|e| DomainError::Internal {
                message: format!("Failed to get token_hash: {}", e),
            })?,
            jwt_id: row.try_get("jwt_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get jwt_id: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get expires_at: {}", e),
                })?,
            is_used: row.try_get("is_used").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_used: {}", e),
            })?,
            is_revoked: row.try_get("is_revoked").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_revoked: {}", e),
            })?,
        })
    }
}

#[async_trait]
impl TokenRepository for MySqlTokenRepository {
    async fn save(&self, token: RefreshToken) -> Result<RefreshToken, DomainError> {
        let query = r#"
            INSERT INTO refresh_tokens (
                id, user_id, token_hash, jwt_id, created_at, expires_at, is_used, is_revoked
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(token.id.to_string())
            .bind(token.user_id.to_string())
            .bind(&token.token_hash)
            .bind(&token.jwt_id)
            .bind(token.created_at)
            .bind(token.expires_at)
            .bind(token.is_used)
            .bind(token.is_revoked)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save refresh token: {}", e),
            })?;

        Ok(token)
    }

    async fn find_by_hash(&self, token_hash: &str) -> Result<Option<RefreshToken>, DomainError> {
        let query = r#"
            SELECT id, user_id, token_hash, jwt_id, created_at, expires_at, is_used, is_revoked
            FROM refresh_tokens
            WHERE token_hash = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find refresh token: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_token(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, token_hash: &str) -> Result<bool, DomainError> {
        // Conditional update: concurrent rotations race on this statement
        // and the row predicate lets exactly one of them win.
        let query = r#"
            UPDATE refresh_tokens
            SET is_used = TRUE
            WHERE token_hash = ? AND is_used = FALSE AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to mark token used: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn revoke(&self, token_hash: &str) -> Result<bool, DomainError> {
        let query = r#"
            UPDATE refresh_tokens
            SET is_revoked = TRUE
            WHERE token_hash = ? AND is_revoked = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(token_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to revoke token: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_expired(&self) -> Result<usize, DomainError> {
        let query = "DELETE FROM refresh_tokens WHERE expires_at < ?";

        let result = sqlx::query(query)
            .bind(Utc::now())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete expired tokens: {}", e),
            })?;

        Ok(result.rows_affected() as usize)
    }
}
