//! Lifecycle event publisher.
//!
//! The Wizone server pushes a notification after every accepted field
//! status change; on the client side the same moment is modeled as an
//! in-process broadcast so notification bridges (push, Telegram bot,
//! activity feed) can subscribe without the workflow knowing about them.

use serde_json::Value;
use tokio::sync::broadcast;

use crate::models::Task;

/// Broadcast publisher for task lifecycle events
#[derive(Debug, Clone)]
pub struct EventPublisher {
    sender: broadcast::Sender<TaskNotification>,
}

/// Event that has been published
#[derive(Debug, Clone)]
pub struct TaskNotification {
    pub name: String,
    pub context: Value,
    pub published_at: chrono::DateTime<chrono::Utc>,
}

impl EventPublisher {
    /// Create a new publisher with the specified channel capacity
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    /// Publish an event with the given name and context
    pub async fn publish(
        &self,
        event_name: impl Into<String>,
        context: Value,
    ) -> Result<(), PublishError> {
        let event = TaskNotification {
            name: event_name.into(),
            context,
            published_at: chrono::Utc::now(),
        };

        // A send error only means there are no subscribers right now, which
        // is acceptable: lifecycle events are fire-and-forget.
        match self.sender.send(event) {
            Ok(_) | Err(broadcast::error::SendError(_)) => Ok(()),
        }
    }

    /// Publish a task-scoped event with the standard context shape
    pub async fn publish_task_event(
        &self,
        event_name: impl Into<String>,
        task: &Task,
    ) -> Result<(), PublishError> {
        let context = serde_json::json!({
            "taskId": task.id,
            "ticketNumber": task.ticket_number,
            "status": task.status,
        });
        self.publish(event_name, context).await
    }

    /// Subscribe to events
    pub fn subscribe(&self) -> broadcast::Receiver<TaskNotification> {
        self.sender.subscribe()
    }

    /// Get the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

/// Error types for event publishing
#[derive(Debug, thiserror::Error)]
pub enum PublishError {
    #[error("Event channel is closed")]
    ChannelClosed,
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Default for EventPublisher {
    fn default() -> Self {
        Self::new(256)
    }
}
