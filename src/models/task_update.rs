//! Task update log entries.
//!
//! The server appends one of these for every field status change
//! (`status_update`) and completion (`completion`); clients read them back
//! for the ticket activity feed. This side never writes them directly.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskUpdateType {
    StatusUpdate,
    Completion,
}

/// One entry in a task's server-side update log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskUpdate {
    pub task_id: i64,
    #[serde(rename = "type")]
    pub update_type: TaskUpdateType,
    pub message: String,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Default log message the server records for a note-less status update.
///
/// Mirrors the server's fallback (`Status changed to {status}`) so clients
/// can render a pending entry before the echo arrives.
pub fn default_status_message(status: crate::state_machine::FieldTaskState) -> String {
    format!("Status changed to {status}")
}
