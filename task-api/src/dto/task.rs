//! Task endpoint DTOs. Wire field names are camelCase; responses serialize
//! `TaskItem` directly.

use serde::{Deserialize, Serialize};
use validator::Validate;

use td_core::domain::entities::task::TaskChanges;

/// Body of task create and update requests
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TaskRequest {
    #[validate(length(min = 1, max = 255))]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub is_completed: bool,
}

impl From<TaskRequest> for TaskChanges {
    fn from(request: TaskRequest) -> Self {
        TaskChanges {
            title: request.title,
            description: request.description,
            is_completed: request.is_completed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn task_request_defaults_optional_fields() {
        let request: TaskRequest = serde_json::from_str(r#"{"title":"Write report"}"#).unwrap();
        assert_eq!(request.title, "Write report");
        assert_eq!(request.description, "");
        assert!(!request.is_completed);
    }

    #[test]
    fn empty_title_fails_validation() {
        let request: TaskRequest =
            serde_json::from_str(r#"{"title":"","isCompleted":true}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
