//! Update submitter: the single side-effecting hand-off of a validated
//! status change.
//!
//! Business rules are already settled by the time a change reaches this
//! type; the submitter only routes the change to the right endpoint,
//! reconciles the query cache on success, and classifies failures into
//! the two kinds the session layer distinguishes.

use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use crate::cache::{QueryCache, QueryKey};
use crate::client::{ApiError, FieldStatusUpdate, TaskCompletion, TaskUpdateApi};
use crate::constants::events;
use crate::events::EventPublisher;
use crate::logging::log_task_operation;
use crate::models::{Task, ValidatedStatusChange};

/// Failures a submission can surface past the session boundary
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Session expired; the host application must re-authenticate.
    #[error("authentication expired, sign-in required")]
    AuthenticationExpired,

    /// Transport or server failure. The draft is kept so the engineer can
    /// resubmit without re-entering anything.
    #[error("{message}")]
    Retryable { message: String },
}

impl SubmitError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::Retryable { .. })
    }
}

pub struct UpdateSubmitter {
    api: Arc<dyn TaskUpdateApi>,
    cache: Arc<dyn QueryCache>,
    publisher: EventPublisher,
}

impl UpdateSubmitter {
    pub fn new(
        api: Arc<dyn TaskUpdateApi>,
        cache: Arc<dyn QueryCache>,
        publisher: EventPublisher,
    ) -> Self {
        Self {
            api,
            cache,
            publisher,
        }
    }

    /// Submit a validated change. Exactly one network call per invocation;
    /// there is no automatic retry.
    ///
    /// On success the list and detail cache entries for this task are each
    /// invalidated once, and a lifecycle event is published.
    pub async fn submit(
        &self,
        task_id: i64,
        change: &ValidatedStatusChange,
    ) -> Result<Task, SubmitError> {
        let result = match change {
            ValidatedStatusChange::Status { target, note } => {
                self.api
                    .update_field_status(
                        task_id,
                        FieldStatusUpdate {
                            status: *target,
                            note: note.clone(),
                        },
                    )
                    .await
            }
            ValidatedStatusChange::Completion {
                completion_note,
                attachments,
            } => {
                self.api
                    .complete_task(
                        task_id,
                        TaskCompletion {
                            completion_note: completion_note.clone(),
                            files: attachments.clone(),
                        },
                    )
                    .await
            }
        };

        match result {
            Ok(task) => {
                self.cache.invalidate(&QueryKey::Tasks);
                self.cache.invalidate(&QueryKey::Task(task_id));

                let event_name = if change.is_completion() {
                    events::TASK_COMPLETED
                } else {
                    events::TASK_FIELD_STATUS_UPDATED
                };
                if let Err(err) = self.publisher.publish_task_event(event_name, &task).await {
                    warn!(task_id, error = %err, "lifecycle event publish failed");
                }

                log_task_operation(
                    if change.is_completion() {
                        "task_completion"
                    } else {
                        "field_status_update"
                    },
                    Some(task_id),
                    Some(&task.ticket_number),
                    &task.status.to_string(),
                    None,
                );
                Ok(task)
            }
            Err(ApiError::AuthenticationExpired) => {
                warn!(task_id, "submission rejected: authentication expired");
                Err(SubmitError::AuthenticationExpired)
            }
            Err(err) => {
                let failure = self
                    .publisher
                    .publish(
                        events::TASK_UPDATE_FAILED,
                        serde_json::json!({
                            "taskId": task_id,
                            "error": err.to_string(),
                        }),
                    )
                    .await;
                if let Err(publish_err) = failure {
                    warn!(task_id, error = %publish_err, "failure event publish failed");
                }

                warn!(task_id, error = %err, "field status submission failed");
                Err(SubmitError::Retryable {
                    message: err.to_string(),
                })
            }
        }
    }
}
