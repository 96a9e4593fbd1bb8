//! Wire payloads for the task-update endpoints.
//!
//! Field names follow the server contract exactly: status updates post
//! `{"status", "note"}`, completions post `{"completionNote", "files"}`,
//! and failures come back as `{"message"}`.

use crate::state_machine::FieldTaskState;
use serde::{Deserialize, Serialize};

/// Body of `POST /api/tasks/{id}/field-status`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldStatusUpdate {
    pub status: FieldTaskState,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Body of `POST /api/tasks/{id}/complete`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskCompletion {
    pub completion_note: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub files: Vec<String>,
}

/// Error body the server returns on 4xx/5xx
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorPayload {
    #[serde(default)]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_status_update_serialization() {
        let body = FieldStatusUpdate {
            status: FieldTaskState::WaitingForCustomer,
            note: Some("Customer not available".to_string()),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "status": "waiting_for_customer",
                "note": "Customer not available",
            })
        );
    }

    #[test]
    fn test_status_update_omits_missing_note() {
        let body = FieldStatusUpdate {
            status: FieldTaskState::StartTask,
            note: None,
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"status": "start_task"})
        );
    }

    #[test]
    fn test_completion_serialization() {
        let body = TaskCompletion {
            completion_note: "Resolved, replaced router".to_string(),
            files: vec!["photo1.jpg".to_string()],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "completionNote": "Resolved, replaced router",
                "files": ["photo1.jpg"],
            })
        );
    }

    #[test]
    fn test_completion_omits_empty_files() {
        let body = TaskCompletion {
            completion_note: "Fixed".to_string(),
            files: vec![],
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"completionNote": "Fixed"})
        );
    }

    #[test]
    fn test_error_payload_tolerates_missing_message() {
        let payload: ErrorPayload = serde_json::from_str("{}").unwrap();
        assert_eq!(payload.message, "");
    }
}
