//! Field task workflow session.
//!
//! One session per opened task. It owns the engineer-facing lifecycle:
//! pick a status from the catalog, fill the fields that status demands,
//! submit, and fold the server's updated task back in. Validation errors
//! are returned as values for inline rendering; only authentication expiry
//! and retryable transport failures escape to the host application.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use thiserror::Error;
use tracing::debug;

use super::completion::CompletionDraft;
use super::submitter::{SubmitError, UpdateSubmitter};
use crate::constants::{status_badge_color, StatusOption, FIELD_STATUS_CATALOG};
use crate::logging::log_status_transition;
use crate::models::{StatusChangeRequest, Task};
use crate::state_machine::{
    check_transition, required_fields, validate_request, FieldTaskState, RequiredField,
    TransitionError, TransitionResult,
};

/// Errors a submission attempt can return to the UI layer
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WorkflowError {
    /// Locally recoverable; render inline next to the offending field.
    #[error(transparent)]
    Validation(#[from] TransitionError),

    /// The submit control is disabled while a call is in flight.
    #[error("a submission is already in flight for this task")]
    SubmissionInFlight,

    /// Escaped the local boundary: auth redirect or retryable toast.
    #[error(transparent)]
    Submission(#[from] SubmitError),
}

/// What a completed submission produced
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The server accepted the change; the session now holds this task.
    Updated(Task),
    /// The session was disposed while the call was in flight; the response
    /// was dropped. Caches were still reconciled since the server-side
    /// change did happen.
    Discarded,
}

/// Handle for tearing the workflow down from outside the session, e.g. on
/// modal dismissal while a submission is still in flight.
#[derive(Debug, Clone)]
pub struct WorkflowHandle {
    disposed: Arc<AtomicBool>,
}

impl WorkflowHandle {
    pub fn dispose(&self) {
        self.disposed.store(true, Ordering::SeqCst);
    }

    pub fn is_disposed(&self) -> bool {
        self.disposed.load(Ordering::SeqCst)
    }
}

pub struct FieldTaskWorkflow {
    task: Task,
    submitter: UpdateSubmitter,
    selected: Option<FieldTaskState>,
    note: String,
    completion: Option<CompletionDraft>,
    in_flight: Arc<AtomicBool>,
    disposed: Arc<AtomicBool>,
}

impl FieldTaskWorkflow {
    pub fn new(task: Task, submitter: UpdateSubmitter) -> Self {
        Self {
            task,
            submitter,
            selected: None,
            note: String::new(),
            completion: None,
            in_flight: Arc::new(AtomicBool::new(false)),
            disposed: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    /// Terminal tasks render as read-only: nothing selectable, nothing
    /// submittable.
    pub fn is_read_only(&self) -> bool {
        self.task.is_terminal()
    }

    /// Status options to render, in catalog order. Empty for terminal
    /// tasks.
    pub fn selectable_statuses(&self) -> &'static [StatusOption] {
        if self.is_read_only() {
            &[]
        } else {
            &FIELD_STATUS_CATALOG
        }
    }

    /// Badge color token for the task's current status
    pub fn current_badge_color(&self) -> &'static str {
        status_badge_color(self.task.status)
    }

    /// Select a target status from the catalog.
    ///
    /// Choosing `completed` opens a fresh completion draft (any previous
    /// draft is reset); choosing anything else closes it.
    pub fn select_status(&mut self, target: FieldTaskState) -> TransitionResult<()> {
        check_transition(self.task.status, target)?;

        self.selected = Some(target);
        if target == FieldTaskState::Completed {
            self.completion = Some(CompletionDraft::new());
            self.note.clear();
        } else {
            self.completion = None;
        }
        debug!(task_id = self.task.id, target = %target, "status selected");
        Ok(())
    }

    pub fn selected_status(&self) -> Option<FieldTaskState> {
        self.selected
    }

    /// Fields that must be filled for the currently selected status
    pub fn required_fields(&self) -> &'static [RequiredField] {
        self.selected.map(required_fields).unwrap_or(&[])
    }

    pub fn set_note(&mut self, note: impl Into<String>) {
        self.note = note.into();
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn completion(&self) -> Option<&CompletionDraft> {
        self.completion.as_ref()
    }

    pub fn completion_mut(&mut self) -> Option<&mut CompletionDraft> {
        self.completion.as_mut()
    }

    /// Leave the completion screen and return to status selection.
    ///
    /// The draft (note and attachments) is discarded; the selected status
    /// is kept so the selector still shows it.
    pub fn back(&mut self) {
        self.completion = None;
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Whether the submit control should be enabled right now
    pub fn can_submit(&self) -> bool {
        !self.is_submitting()
            && validate_request(self.task.status, &self.build_request()).is_ok()
    }

    /// Handle the host can use to dispose this workflow when the UI
    /// context goes away
    pub fn dispose_handle(&self) -> WorkflowHandle {
        WorkflowHandle {
            disposed: Arc::clone(&self.disposed),
        }
    }

    fn build_request(&self) -> StatusChangeRequest {
        StatusChangeRequest {
            target_status: self.selected,
            note: (!self.note.is_empty()).then(|| self.note.clone()),
            completion_note: self
                .completion
                .as_ref()
                .map(|draft| draft.note().to_string()),
            attachments: self
                .completion
                .as_ref()
                .map(|draft| draft.attachments().to_vec())
                .unwrap_or_default(),
        }
    }

    /// Validate the current draft and submit it.
    ///
    /// Local rejections (missing fields, no-op, terminal) return before
    /// any network call and leave every entered field untouched. Retryable
    /// failures also keep the draft so a resubmit needs no re-entry. Only
    /// a success clears the selection and draft.
    pub async fn submit(&mut self) -> Result<SubmitOutcome, WorkflowError> {
        let change = validate_request(self.task.status, &self.build_request())?;

        if self
            .in_flight
            .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
            .is_err()
        {
            return Err(WorkflowError::SubmissionInFlight);
        }

        let result = self.submitter.submit(self.task.id, &change).await;
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(updated) => {
                if self.disposed.load(Ordering::SeqCst) {
                    debug!(task_id = self.task.id, "workflow disposed, response dropped");
                    return Ok(SubmitOutcome::Discarded);
                }
                log_status_transition(
                    self.task.id,
                    &self.task.status.to_string(),
                    &updated.status.to_string(),
                );
                self.task = updated.clone();
                self.selected = None;
                self.note.clear();
                self.completion = None;
                Ok(SubmitOutcome::Updated(updated))
            }
            Err(err) => Err(WorkflowError::Submission(err)),
        }
    }
}
