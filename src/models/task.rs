//! # Task Model
//!
//! Client-side representation of a Wizone service ticket.
//!
//! ## Overview
//!
//! The `Task` model mirrors the server's task representation as returned by
//! the task endpoints. From the field workflow's perspective a task is
//! referenced, never owned: every field except `status` is read-only here,
//! and `status` only changes by submitting a validated status change and
//! replacing the local copy with the server's response.
//!
//! ## Wire Format
//!
//! The Wizone server serializes tasks in camelCase JSON
//! (`ticketNumber`, `fieldStartTime`, ...); serde renaming keeps this
//! struct aligned with that contract. Timestamp columns the server manages
//! on our behalf (`fieldStartTime`, `fieldWaitingTime`, `completionTime`)
//! are carried through deserialization so detail views can render them.

use crate::state_machine::FieldTaskState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A service ticket tracked through the field status lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: i64,
    pub ticket_number: String,
    #[serde(default)]
    pub title: Option<String>,
    pub status: FieldTaskState,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub issue_type: Option<String>,
    /// Set by the server when the engineer starts the task
    #[serde(default)]
    pub field_start_time: Option<DateTime<Utc>>,
    /// Set by the server when the engineer reports waiting on the customer
    #[serde(default)]
    pub field_waiting_time: Option<DateTime<Utc>>,
    /// The note supplied with the most recent waiting_for_customer update
    #[serde(default)]
    pub field_waiting_reason: Option<String>,
    #[serde(default)]
    pub completion_note: Option<String>,
    #[serde(default)]
    pub completion_time: Option<DateTime<Utc>>,
    /// User id of the engineer who completed the task
    #[serde(default)]
    pub resolved_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Check if this task accepts no further field status changes
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_server_representation() {
        let json = r#"{
            "id": 42,
            "ticketNumber": "WZ-2024-0042",
            "title": "Router offline",
            "status": "start_task",
            "priority": "high",
            "issueType": "connectivity",
            "fieldStartTime": "2024-03-01T09:30:00Z"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id, 42);
        assert_eq!(task.ticket_number, "WZ-2024-0042");
        assert_eq!(task.status, FieldTaskState::StartTask);
        assert_eq!(task.issue_type.as_deref(), Some("connectivity"));
        assert!(task.field_start_time.is_some());
        assert!(task.completion_note.is_none());
        assert!(!task.is_terminal());
    }

    #[test]
    fn test_terminal_task() {
        let json = r#"{
            "id": 7,
            "ticketNumber": "WZ-2024-0007",
            "status": "completed",
            "completionNote": "Replaced faulty ONT",
            "resolvedBy": "eng-11"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.is_terminal());
        assert_eq!(task.completion_note.as_deref(), Some("Replaced faulty ONT"));
    }

    #[test]
    fn test_serialize_uses_camel_case() {
        let task = Task {
            id: 1,
            ticket_number: "WZ-1".to_string(),
            title: None,
            status: FieldTaskState::AssignedToField,
            priority: None,
            issue_type: None,
            field_start_time: None,
            field_waiting_time: None,
            field_waiting_reason: None,
            completion_note: None,
            completion_time: None,
            resolved_by: None,
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&task).unwrap();
        assert_eq!(value["ticketNumber"], "WZ-1");
        assert_eq!(value["status"], "assigned_to_field");
    }
}
