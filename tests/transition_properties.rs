//! Property tests over the full transition rule matrix.

use proptest::prelude::*;

use wizone_core::models::StatusChangeRequest;
use wizone_core::state_machine::{
    check_transition, validate_request, FieldTaskState, RequiredField, TransitionError,
};

fn any_state() -> impl Strategy<Value = FieldTaskState> {
    prop_oneof![
        Just(FieldTaskState::Pending),
        Just(FieldTaskState::AssignedToField),
        Just(FieldTaskState::StartTask),
        Just(FieldTaskState::WaitingForCustomer),
        Just(FieldTaskState::Completed),
        Just(FieldTaskState::Cancelled),
    ]
}

proptest! {
    /// Terminal states reject every target, whatever it is.
    #[test]
    fn terminal_states_reject_all_targets(target in any_state()) {
        for current in [FieldTaskState::Completed, FieldTaskState::Cancelled] {
            prop_assert_eq!(
                check_transition(current, target),
                Err(TransitionError::TerminalState { current })
            );
        }
    }

    /// A self-transition is never allowed; non-terminal states report it
    /// as a no-op, terminal states as terminal.
    #[test]
    fn self_transitions_never_allowed(state in any_state()) {
        let result = check_transition(state, state);
        if state.is_terminal() {
            prop_assert_eq!(
                result,
                Err(TransitionError::TerminalState { current: state })
            );
        } else {
            prop_assert_eq!(
                result,
                Err(TransitionError::NoOpTransition { status: state })
            );
        }
    }

    /// A transition is allowed exactly when the source is one of the
    /// field-actionable states, the target is field-selectable, and the
    /// pair is not a self-transition.
    #[test]
    fn allowed_matches_the_rule_matrix(current in any_state(), target in any_state()) {
        let allowed = check_transition(current, target).is_ok();
        let expected = current.is_field_actionable()
            && target.is_field_selectable()
            && current != target;
        prop_assert_eq!(allowed, expected);
    }

    /// Entering waiting_for_customer demands a non-blank note; any other
    /// allowed non-completion target treats the note as optional.
    #[test]
    fn waiting_note_requirement(note in "[ a-zA-Z0-9]{0,20}") {
        let draft = StatusChangeRequest::new(FieldTaskState::WaitingForCustomer)
            .with_note(note.clone());
        let result = validate_request(FieldTaskState::StartTask, &draft);

        if note.trim().is_empty() {
            prop_assert_eq!(
                result,
                Err(TransitionError::MissingField { field: RequiredField::Note })
            );
        } else {
            prop_assert!(result.is_ok());
        }
    }

    /// Completion always demands a non-blank completion note, regardless
    /// of attachments.
    #[test]
    fn completion_note_requirement(
        note in "[ a-zA-Z0-9]{0,20}",
        attachments in proptest::collection::vec("[a-z]{1,8}\\.jpg", 0..4),
    ) {
        let draft = StatusChangeRequest::new(FieldTaskState::Completed)
            .with_completion_note(note.clone())
            .with_attachments(attachments);
        let result = validate_request(FieldTaskState::StartTask, &draft);

        if note.trim().is_empty() {
            prop_assert_eq!(
                result,
                Err(TransitionError::MissingField {
                    field: RequiredField::CompletionNote,
                })
            );
        } else {
            prop_assert!(result.is_ok());
        }
    }
}
