use serde::{Deserialize, Serialize};
use std::fmt;

/// Field task state definitions matching the Wizone server's status column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldTaskState {
    /// Initial state when a ticket is created by dispatch
    Pending,
    /// Ticket has been handed to a field engineer
    AssignedToField,
    /// Engineer is actively working the ticket on site
    StartTask,
    /// Work is paused until the customer responds or grants access
    WaitingForCustomer,
    /// Work finished and a completion note was recorded
    Completed,
    /// Ticket was cancelled by dispatch or the customer
    Cancelled,
}

impl FieldTaskState {
    /// Check if this is a terminal state (no further transitions allowed)
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }

    /// Check if this is an active state (engineer is on the ticket)
    pub fn is_active(&self) -> bool {
        matches!(self, Self::StartTask | Self::WaitingForCustomer)
    }

    /// Check if the field actor may move *from* this state
    ///
    /// Creation (`pending`) and cancellation are dispatch/admin transitions;
    /// the field actor only drives the assigned-and-onward portion of the
    /// lifecycle.
    pub fn is_field_actionable(&self) -> bool {
        matches!(
            self,
            Self::AssignedToField | Self::StartTask | Self::WaitingForCustomer
        )
    }

    /// Check if the field actor may move *to* this state
    pub fn is_field_selectable(&self) -> bool {
        matches!(
            self,
            Self::StartTask | Self::WaitingForCustomer | Self::Completed
        )
    }
}

impl fmt::Display for FieldTaskState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::AssignedToField => write!(f, "assigned_to_field"),
            Self::StartTask => write!(f, "start_task"),
            Self::WaitingForCustomer => write!(f, "waiting_for_customer"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for FieldTaskState {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "assigned_to_field" => Ok(Self::AssignedToField),
            "start_task" => Ok(Self::StartTask),
            "waiting_for_customer" => Ok(Self::WaitingForCustomer),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("Invalid field task state: {s}")),
        }
    }
}

/// Default state for a freshly assigned task as seen by the field actor
impl Default for FieldTaskState {
    fn default() -> Self {
        Self::AssignedToField
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminal_check() {
        assert!(FieldTaskState::Completed.is_terminal());
        assert!(FieldTaskState::Cancelled.is_terminal());
        assert!(!FieldTaskState::Pending.is_terminal());
        assert!(!FieldTaskState::AssignedToField.is_terminal());
        assert!(!FieldTaskState::StartTask.is_terminal());
        assert!(!FieldTaskState::WaitingForCustomer.is_terminal());
    }

    #[test]
    fn test_field_actionable_and_selectable() {
        assert!(FieldTaskState::AssignedToField.is_field_actionable());
        assert!(FieldTaskState::StartTask.is_field_actionable());
        assert!(FieldTaskState::WaitingForCustomer.is_field_actionable());
        assert!(!FieldTaskState::Pending.is_field_actionable());
        assert!(!FieldTaskState::Completed.is_field_actionable());
        assert!(!FieldTaskState::Cancelled.is_field_actionable());

        assert!(FieldTaskState::StartTask.is_field_selectable());
        assert!(FieldTaskState::WaitingForCustomer.is_field_selectable());
        assert!(FieldTaskState::Completed.is_field_selectable());
        assert!(!FieldTaskState::Pending.is_field_selectable());
        assert!(!FieldTaskState::AssignedToField.is_field_selectable());
        assert!(!FieldTaskState::Cancelled.is_field_selectable());
    }

    #[test]
    fn test_state_string_conversion() {
        assert_eq!(FieldTaskState::StartTask.to_string(), "start_task");
        assert_eq!(
            "waiting_for_customer".parse::<FieldTaskState>().unwrap(),
            FieldTaskState::WaitingForCustomer
        );
        assert!("in_progress".parse::<FieldTaskState>().is_err());
    }

    #[test]
    fn test_state_serde() {
        let state = FieldTaskState::WaitingForCustomer;
        let json = serde_json::to_string(&state).unwrap();
        assert_eq!(json, "\"waiting_for_customer\"");

        let parsed: FieldTaskState = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, state);
    }

    #[test]
    fn test_default_is_assigned() {
        assert_eq!(FieldTaskState::default(), FieldTaskState::AssignedToField);
    }
}
