//! Task mutation events published to the notification queue.
//!
//! Wire format: `{"type": "TaskCreated"|"TaskUpdated"|"TaskDeleted",
//! "payload": <camelCase task> | {"id": <id>}}` on a single named,
//! non-durable queue. Delivery is fire-and-forget.

use serde::{Deserialize, Serialize};

use crate::domain::entities::task::TaskItem;

/// Kind of task mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskEventType {
    TaskCreated,
    TaskUpdated,
    TaskDeleted,
}

/// Payload attached to a task event.
///
/// Deletes carry only the id of the removed task; creates and updates carry
/// the full task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskEventPayload {
    Task(TaskItem),
    Deleted { id: i64 },
}

/// Event published for every task mutation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskEvent {
    #[serde(rename = "type")]
    pub event_type: TaskEventType,
    pub payload: TaskEventPayload,
}

impl TaskEvent {
    pub fn created(task: TaskItem) -> Self {
        Self {
            event_type: TaskEventType::TaskCreated,
            payload: TaskEventPayload::Task(task),
        }
    }

    pub fn updated(task: TaskItem) -> Self {
        Self {
            event_type: TaskEventType::TaskUpdated,
            payload: TaskEventPayload::Task(task),
        }
    }

    pub fn deleted(id: i64) -> Self {
        Self {
            event_type: TaskEventType::TaskDeleted,
            payload: TaskEventPayload::Deleted { id },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_task() -> TaskItem {
        TaskItem {
            id: 42,
            user_id: Uuid::new_v4(),
            title: "Ship release".into(),
            description: "v0.1.0".into(),
            is_completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn created_event_wire_format() {
        let event = TaskEvent::created(sample_task());
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "TaskCreated");
        assert_eq!(json["payload"]["id"], 42);
        assert_eq!(json["payload"]["isCompleted"], false);
    }

    #[test]
    fn deleted_event_carries_only_id() {
        let event = TaskEvent::deleted(7);
        let json = serde_json::to_value(&event).unwrap();

        assert_eq!(json["type"], "TaskDeleted");
        assert_eq!(json["payload"], serde_json::json!({ "id": 7 }));
    }

    #[test]
    fn events_round_trip() {
        let event = TaskEvent::updated(sample_task());
        let json = serde_json::to_string(&event).unwrap();
        let parsed: TaskEvent = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.event_type, TaskEventType::TaskUpdated);
        match parsed.payload {
            TaskEventPayload::Task(task) => assert_eq!(task.id, 42),
            TaskEventPayload::Deleted { .. } => panic!("expected full task payload"),
        }

        let deleted: TaskEvent = serde_json::from_str(
            r#"{"type":"TaskDeleted","payload":{"id":7}}"#,
        )
        .unwrap();
        assert_eq!(deleted.payload, TaskEventPayload::Deleted { id: 7 });
    }
}
