use thiserror::Error;

use super::states::FieldTaskState;

/// Fields the validator can demand before a transition may be submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredField {
    /// Free-text note, mandatory when entering waiting_for_customer
    Note,
    /// Resolution note, mandatory when entering completed
    CompletionNote,
}

impl RequiredField {
    /// Wire/form name of the field, as the server and clients know it
    pub fn field_name(&self) -> &'static str {
        match self {
            Self::Note => "note",
            Self::CompletionNote => "completionNote",
        }
    }
}

impl std::fmt::Display for RequiredField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Rejections produced by the transition validator
///
/// All of these are recovered locally (inline form feedback); none of them
/// results in a network call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    #[error("task is already {current} and accepts no further status changes")]
    TerminalState { current: FieldTaskState },

    #[error("task is already {status}")]
    NoOpTransition { status: FieldTaskState },

    #[error("transition from {from} to {to} is not available to the field engineer")]
    InvalidTransition {
        from: FieldTaskState,
        to: FieldTaskState,
    },

    #[error("required field is empty: {field}")]
    MissingField { field: RequiredField },
}

pub type TransitionResult<T> = std::result::Result<T, TransitionError>;

impl From<TransitionError> for crate::error::WizoneError {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::MissingField { .. } => {
                crate::error::WizoneError::ValidationError(err.to_string())
            }
            _ => crate::error::WizoneError::StateTransitionError(err.to_string()),
        }
    }
}
