//! MySQL implementation of the UserRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use td_core::domain::entities::user::User;
use td_core::errors::{AuthError, DomainError};
use td_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
///
/// UUIDs are stored as CHAR(36) strings and the role set as a JSON array
/// column. Uniqueness of username and email is enforced by the schema; a
/// unique violation on save surfaces as `DuplicateUser`.
pub struct MySqlUserRepository {
    pool: MySqlPool,
}

impl MySqlUserRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row
            .try_get("id")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get id: {}", e) })?;
        let roles_json: String = row
            .try_get("roles")
            .map_err(|e| DomainError::Internal { message: format!("Failed to get roles: {}", e) })?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            username: row.try_get("username").map_err(|e| DomainError::Internal {
                message: format!("Failed to get username: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            password_hash: row.try_get("password_hash").map_err(|e| DomainError::Internal {
                message: format!("Failed to get password_hash: {}", e),
            })?,
            roles: serde_json::from_str(&roles_json).map_err(|e| DomainError::Internal {
                message: format!("Invalid roles column: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get updated_at: {}", e),
                })?,
        })
    }

    async fn find_one(&self, query: &str, value: &str) -> Result<Option<User>, DomainError> {
        let result = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find user: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_user(&row)?)),
            None => Ok(None),
        }
    }
}

const SELECT_COLUMNS: &str = "id, username, email, password_hash, roles, created_at, updated_at";

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn save(&self, user: User) -> Result<User, DomainError> {
        let roles_json = serde_json::to_string(&user.roles).map_err(|e| DomainError::Internal {
            message: format!("Failed to serialize roles: {}", e),
        })?;

        let query = r#"
            INSERT INTO users (
                id, username, email, password_hash, roles, created_at, updated_at
            ) VALUES (?, ?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.username)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(&roles_json)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| match &e {
                sqlx::Error::Database(db) if db.is_unique_violation() => {
                    DomainError::Auth(AuthError::DuplicateUser)
                }
                _ => DomainError::Internal {
                    message: format!("Failed to save user: {}", e),
                },
            })?;

        Ok(user)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users WHERE id = ? LIMIT 1");
        self.find_one(&query, &id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users WHERE email = ? LIMIT 1");
        self.find_one(&query, email).await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let query = format!("SELECT {SELECT_COLUMNS} FROM users WHERE username = ? LIMIT 1");
        self.find_one(&query, username).await
    }
}
