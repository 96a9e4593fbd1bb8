//! Test support: sample data factories and scripted doubles for the API
//! and cache seams. Used by the unit suites and the integration tests.

use std::collections::VecDeque;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::cache::{QueryCache, QueryKey};
use crate::client::{ApiError, ApiResult, FieldStatusUpdate, TaskCompletion, TaskUpdateApi};
use crate::models::Task;
use crate::state_machine::FieldTaskState;

/// Build a minimal task in the given status
pub fn sample_task(id: i64, status: FieldTaskState) -> Task {
    Task {
        id,
        ticket_number: format!("WZ-2024-{id:04}"),
        title: Some("Router offline".to_string()),
        status,
        priority: Some("high".to_string()),
        issue_type: Some("connectivity".to_string()),
        field_start_time: None,
        field_waiting_time: None,
        field_waiting_reason: None,
        completion_note: None,
        completion_time: None,
        resolved_by: None,
        created_at: None,
        updated_at: None,
    }
}

/// Cache double that records every invalidation instead of storing data
#[derive(Default)]
pub struct RecordingQueryCache {
    invalidations: Mutex<Vec<QueryKey>>,
    puts: Mutex<Vec<QueryKey>>,
}

impl RecordingQueryCache {
    pub fn invalidations(&self) -> Vec<QueryKey> {
        self.invalidations.lock().clone()
    }

    pub fn invalidation_count(&self, key: &QueryKey) -> usize {
        self.invalidations.lock().iter().filter(|k| *k == key).count()
    }

    pub fn put_count(&self) -> usize {
        self.puts.lock().len()
    }
}

impl QueryCache for RecordingQueryCache {
    fn put(&self, key: QueryKey, _value: serde_json::Value) {
        self.puts.lock().push(key);
    }

    fn get(&self, _key: &QueryKey) -> Option<serde_json::Value> {
        None
    }

    fn invalidate(&self, key: &QueryKey) {
        self.invalidations.lock().push(key.clone());
    }
}

/// API double with queued responses and recorded calls
#[derive(Default)]
pub struct ScriptedTaskApi {
    task_responses: Mutex<VecDeque<ApiResult<Task>>>,
    list_responses: Mutex<VecDeque<ApiResult<Vec<Task>>>>,
    status_calls: Mutex<Vec<FieldStatusUpdate>>,
    completion_calls: Mutex<Vec<TaskCompletion>>,
    fetch_calls: Mutex<Vec<i64>>,
    list_calls: Mutex<Vec<String>>,
}

impl ScriptedTaskApi {
    /// Queue the next response for a task-returning endpoint
    pub fn push_task(&self, response: ApiResult<Task>) {
        self.task_responses.lock().push_back(response);
    }

    /// Queue the next response for the assigned-list endpoint
    pub fn push_task_list(&self, response: ApiResult<Vec<Task>>) {
        self.list_responses.lock().push_back(response);
    }

    pub fn status_calls(&self) -> Vec<FieldStatusUpdate> {
        self.status_calls.lock().clone()
    }

    pub fn completion_calls(&self) -> Vec<TaskCompletion> {
        self.completion_calls.lock().clone()
    }

    /// Total calls across all endpoints
    pub fn call_count(&self) -> usize {
        self.status_calls.lock().len()
            + self.completion_calls.lock().len()
            + self.fetch_calls.lock().len()
            + self.list_calls.lock().len()
    }

    fn next_task(&self) -> ApiResult<Task> {
        self.task_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}

#[async_trait]
impl TaskUpdateApi for ScriptedTaskApi {
    async fn update_field_status(
        &self,
        _task_id: i64,
        update: FieldStatusUpdate,
    ) -> ApiResult<Task> {
        self.status_calls.lock().push(update);
        self.next_task()
    }

    async fn complete_task(&self, _task_id: i64, completion: TaskCompletion) -> ApiResult<Task> {
        self.completion_calls.lock().push(completion);
        self.next_task()
    }

    async fn fetch_task(&self, task_id: i64) -> ApiResult<Task> {
        self.fetch_calls.lock().push(task_id);
        self.next_task()
    }

    async fn fetch_assigned_tasks(&self, engineer_id: &str) -> ApiResult<Vec<Task>> {
        self.list_calls.lock().push(engineer_id.to_string());
        self.list_responses
            .lock()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Transport("no scripted response".to_string())))
    }
}
