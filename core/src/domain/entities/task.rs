//! Task entity and mutation payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A task item as persisted and as serialized onto the wire (camelCase)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskItem {
    /// Store-assigned identifier
    pub id: i64,

    /// User that created the task
    pub user_id: Uuid,

    /// Short title
    pub title: String,

    /// Free-form description
    pub description: String,

    /// Completion flag
    pub is_completed: bool,

    /// Timestamp when the task was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the task was last updated
    pub updated_at: DateTime<Utc>,
}

impl TaskItem {
    /// Applies a client-supplied change set and bumps `updated_at`
    pub fn apply(&mut self, changes: TaskChanges) {
        self.title = changes.title;
        self.description = changes.description;
        self.is_completed = changes.is_completed;
        self.updated_at = Utc::now();
    }
}

/// Payload for creating a task; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTask {
    pub user_id: Uuid,
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

impl NewTask {
    pub fn new(
        user_id: Uuid,
        title: impl Into<String>,
        description: impl Into<String>,
        is_completed: bool,
    ) -> Self {
        Self {
            user_id,
            title: title.into(),
            description: description.into(),
            is_completed,
        }
    }
}

/// The client-mutable fields of a task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskChanges {
    pub title: String,
    pub description: String,
    pub is_completed: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_serializes_camel_case() {
        let task = TaskItem {
            id: 1,
            user_id: Uuid::new_v4(),
            title: "Write report".into(),
            description: "Quarterly numbers".into(),
            is_completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["title"], "Write report");
        assert_eq!(json["isCompleted"], false);
        assert!(json.get("userId").is_some());
        assert!(json.get("is_completed").is_none());
    }

    #[test]
    fn apply_overwrites_mutable_fields() {
        let mut task = TaskItem {
            id: 1,
            user_id: Uuid::new_v4(),
            title: "Old".into(),
            description: "Old".into(),
            is_completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        task.apply(TaskChanges {
            title: "New".into(),
            description: "Updated".into(),
            is_completed: true,
        });

        assert_eq!(task.title, "New");
        assert_eq!(task.description, "Updated");
        assert!(task.is_completed);
    }
}
