//! MySQL implementation of the TaskRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};
use uuid::Uuid;

use td_core::domain::entities::task::{NewTask, TaskItem};
use td_core::errors::DomainError;
use td_core::repositories::TaskRepository;

/// MySQL implementation of TaskRepository
pub struct MySqlTaskRepository {
    pool: MySqlPool,
}

impl MySqlTaskRepository {
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    fn row_to_task(row: &sqlx::mysql::MySqlRow) -> Result<TaskItem, DomainError> {
        let user_id: String = row.try_get("user_id").map_err(|e| DomainError::Internal {
            message: format!("Failed to get user_id: {}", e),
        })?;

        Ok(TaskItem {
            id: row.try_get("id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?,
            user_id: Uuid::parse_str(&user_id)
                .map_err(|e| DomainError::Internal { message: format!("Invalid user UUID: {}", e) })?,
            title: row.try_get("title").map_err(|e| DomainError::Internal {
                message: format!("Failed to get title: {}", e),
            })?,
            description: row.try_get("description").map_err(|e| DomainError::Internal {
                message: format!("Failed to get description: {}", e),
            })?,
            is_completed: row.try_get("is_completed").map_err(|e| DomainError::Internal {
                message: format!("Failed to get is_completed: {}", e),
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
}

#[async_trait]
impl TaskRepository for MySqlTaskRepository {
    async fn insert(&self, task: NewTask) -> Result<TaskItem, DomainError> {
        let now = Utc::now();
        let query = r#"
            INSERT INTO tasks (user_id, title, description, is_completed, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(task.user_id.to_string())
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.is_completed)
            .bind(now)
            .bind(now)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to insert task: {}", e),
            })?;

        Ok(TaskItem {
            id: result.last_insert_id() as i64,
            user_id: task.user_id,
            title: task.title,
            description: task.description,
            is_completed: task.is_completed,
            created_at: now,
            updated_at: now,
        })
    }

    async fn list_all(&self) -> Result<Vec<TaskItem>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, description, is_completed, created_at, updated_at
            FROM tasks
            ORDER BY id
        "#;

        let rows = sqlx::query(query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to list tasks: {}", e),
            })?;

        let mut tasks = Vec::with_capacity(rows.len());
        for row in rows {
            tasks.push(Self::row_to_task(&row)?);
        }

        Ok(tasks)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<TaskItem>, DomainError> {
        let query = r#"
            SELECT id, user_id, title, description, is_completed, created_at, updated_at
            FROM tasks
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find task: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_task(&row)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, task: &TaskItem) -> Result<(), DomainError> {
        let query = r#"
            UPDATE tasks
            SET title = ?, description = ?, is_completed = ?, updated_at = ?
            WHERE id = ?
        "#;

        let result = sqlx::query(query)
            .bind(&task.title)
            .bind(&task.description)
            .bind(task.is_completed)
            .bind(task.updated_at)
            .bind(task.id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to update task: {}", e),
            })?;

        if result.rows_affected() == 0 {
            return Err(DomainError::NotFound {
                resource: format!("task {}", task.id),
            });
        }

        Ok(())
    }

    async fn delete(&self, id: i64) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete task: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }
}
