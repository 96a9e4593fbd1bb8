pub mod status_change;
pub mod task;
pub mod task_update;

// Re-export core models for easy access
pub use status_change::{StatusChangeRequest, ValidatedStatusChange};
pub use task::Task;
pub use task_update::{default_status_message, TaskUpdate, TaskUpdateType};
