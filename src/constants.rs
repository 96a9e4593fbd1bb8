//! # System Constants and Status Catalog
//!
//! Core constants and fixed display data that define the operational
//! boundaries of the field status workflow.
//!
//! This module maintains compatibility with the Wizone server and its web
//! and mobile clients: status values, lifecycle event names, and the badge
//! palette all match what those clients already render.

use crate::state_machine::FieldTaskState;

// Re-export the state type under the name the server schema uses
pub use crate::state_machine::FieldTaskState as TaskStatus;

/// Lifecycle events published after status submissions
pub mod events {
    /// A non-completion field status change was accepted by the server
    pub const TASK_FIELD_STATUS_UPDATED: &str = "task.field_status_updated";
    /// A completion was accepted by the server
    pub const TASK_COMPLETED: &str = "task.completed";
    /// A submission failed with a retryable transport or server error
    pub const TASK_UPDATE_FAILED: &str = "task.update_failed";
}

/// One selectable entry in the field engineer's status picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusOption {
    pub value: FieldTaskState,
    pub label: &'static str,
    pub description: &'static str,
}

/// Statuses the field engineer can move a task to, in presentation order.
///
/// Order is significant: clients render the picker in exactly this order.
/// `pending`, `assigned_to_field`, and `cancelled` are dispatch/admin
/// transitions and never appear here.
pub const FIELD_STATUS_CATALOG: [StatusOption; 3] = [
    StatusOption {
        value: FieldTaskState::StartTask,
        label: "Start Task",
        description: "Begin working on the task",
    },
    StatusOption {
        value: FieldTaskState::WaitingForCustomer,
        label: "Waiting for Customer",
        description: "Waiting for customer response or access",
    },
    StatusOption {
        value: FieldTaskState::Completed,
        label: "Complete Task",
        description: "Mark task as completed",
    },
];

/// Badge color token for a task's current status.
///
/// Tokens are the utility classes the web client already ships; the mobile
/// shells map them to native colors.
pub fn status_badge_color(status: FieldTaskState) -> &'static str {
    match status {
        FieldTaskState::Pending => "bg-gray-500",
        FieldTaskState::AssignedToField => "bg-blue-500",
        FieldTaskState::StartTask => "bg-green-500",
        FieldTaskState::WaitingForCustomer => "bg-yellow-500",
        FieldTaskState::Completed => "bg-green-600",
        FieldTaskState::Cancelled => "bg-red-500",
    }
}
