// State machine module for the field status workflow
//
// Pure transition rules extracted from the mobile clients' conditional
// rendering, so every permitted move and required-field rule is decided in
// one place and unit-tested independently of any UI.

pub mod errors;
pub mod states;
pub mod transitions;

// Re-export main types for convenient access
pub use errors::{RequiredField, TransitionError, TransitionResult};
pub use states::FieldTaskState;
pub use transitions::{check_transition, required_fields, validate_request};
