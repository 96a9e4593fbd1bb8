//! Pure transition rules for the field status workflow.
//!
//! The rules live here, not in any UI layer: given a current status and a
//! proposed target the validator decides whether the move is permitted and
//! which fields must be filled before submission. Everything is
//! deterministic on its inputs (no I/O, no clock), so the whole rule
//! matrix is unit-testable in isolation.

use super::errors::{RequiredField, TransitionError, TransitionResult};
use super::states::FieldTaskState;
use crate::models::{StatusChangeRequest, ValidatedStatusChange};

/// Check whether `current -> target` is permitted for the field actor.
///
/// Returns the fields that must be non-empty before the change can be
/// submitted. Rule precedence: terminal check first, then self-transition,
/// then the permission matrix; a completed task reports terminal even for
/// `completed -> completed`.
pub fn check_transition(
    current: FieldTaskState,
    target: FieldTaskState,
) -> TransitionResult<&'static [RequiredField]> {
    if current.is_terminal() {
        return Err(TransitionError::TerminalState { current });
    }

    if target == current {
        return Err(TransitionError::NoOpTransition { status: current });
    }

    if !current.is_field_actionable() || !target.is_field_selectable() {
        return Err(TransitionError::InvalidTransition {
            from: current,
            to: target,
        });
    }

    Ok(required_fields(target))
}

/// Fields that must accompany a transition into `target`.
pub fn required_fields(target: FieldTaskState) -> &'static [RequiredField] {
    match target {
        FieldTaskState::WaitingForCustomer => &[RequiredField::Note],
        FieldTaskState::Completed => &[RequiredField::CompletionNote],
        _ => &[],
    }
}

/// Validate a full draft against the current status.
///
/// On success the draft is finalized into a `ValidatedStatusChange`, the
/// only type the update submitter accepts. Whitespace-only text counts as
/// empty for required fields; optional notes are trimmed and dropped when
/// blank.
pub fn validate_request(
    current: FieldTaskState,
    request: &StatusChangeRequest,
) -> TransitionResult<ValidatedStatusChange> {
    let target = request
        .target_status
        .ok_or(TransitionError::NoOpTransition { status: current })?;

    let required = check_transition(current, target)?;

    if target == FieldTaskState::Completed {
        let note = non_blank(request.completion_note.as_deref()).ok_or(
            TransitionError::MissingField {
                field: RequiredField::CompletionNote,
            },
        )?;
        return Ok(ValidatedStatusChange::Completion {
            completion_note: note,
            attachments: request.attachments.clone(),
        });
    }

    let note = non_blank(request.note.as_deref());
    if required.contains(&RequiredField::Note) && note.is_none() {
        return Err(TransitionError::MissingField {
            field: RequiredField::Note,
        });
    }

    Ok(ValidatedStatusChange::Status { target, note })
}

fn non_blank(text: Option<&str>) -> Option<String> {
    text.map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
