// Field workflow: completion capture, update submission, and the
// engineer-facing session that ties them to the transition rules.

pub mod completion;
pub mod session;
pub mod submitter;

// Re-export main types for convenient access
pub use completion::CompletionDraft;
pub use session::{FieldTaskWorkflow, SubmitOutcome, WorkflowError, WorkflowHandle};
pub use submitter::{SubmitError, UpdateSubmitter};
