// Task API client: trait seam, HTTP implementation, wire payloads.

pub mod errors;
pub mod queries;
pub mod task_api;
pub mod types;

// Re-export key types for convenient access
pub use errors::{ApiError, ApiResult};
pub use queries::CachedTaskQueries;
pub use task_api::{HttpTaskUpdateApi, TaskUpdateApi};
pub use types::{ErrorPayload, FieldStatusUpdate, TaskCompletion};
