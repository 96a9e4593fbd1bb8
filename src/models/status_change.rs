//! Ephemeral status-change drafts and their validated form.
//!
//! A `StatusChangeRequest` exists only between the engineer picking a new
//! status and the submission (or cancellation) of that change; it is never
//! persisted locally. The validated form can only be produced by the
//! transition validator, which keeps the status-update and completion
//! branches mutually exclusive by construction.

use crate::state_machine::FieldTaskState;

/// Draft of a proposed status change, mutated as the engineer fills fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusChangeRequest {
    pub target_status: Option<FieldTaskState>,
    pub note: Option<String>,
    pub completion_note: Option<String>,
    pub attachments: Vec<String>,
}

impl StatusChangeRequest {
    /// Start a draft for the given target status
    pub fn new(target_status: FieldTaskState) -> Self {
        Self {
            target_status: Some(target_status),
            ..Self::default()
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_completion_note(mut self, note: impl Into<String>) -> Self {
        self.completion_note = Some(note.into());
        self
    }

    pub fn with_attachments(mut self, attachments: Vec<String>) -> Self {
        self.attachments = attachments;
        self
    }
}

/// A status change that has passed the transition validator.
///
/// Non-completion updates and completions travel to different endpoints
/// with different payloads, so the validated form is an enum rather than a
/// struct with optional fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidatedStatusChange {
    /// start_task or waiting_for_customer, with the optional/required note
    Status {
        target: FieldTaskState,
        note: Option<String>,
    },
    /// Completion with resolution note and uploaded file references
    Completion {
        completion_note: String,
        attachments: Vec<String>,
    },
}

impl ValidatedStatusChange {
    /// The status this change moves the task to
    pub fn target_status(&self) -> FieldTaskState {
        match self {
            Self::Status { target, .. } => *target,
            Self::Completion { .. } => FieldTaskState::Completed,
        }
    }

    pub fn is_completion(&self) -> bool {
        matches!(self, Self::Completion { .. })
    }
}
