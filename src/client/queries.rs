//! Read-through cached task queries.
//!
//! Task list and detail reads go through the query cache: a hit skips the
//! network entirely, a miss fetches and repopulates. Status submissions
//! invalidate these same keys, which is what makes the next read reflect
//! the new status.

use std::sync::Arc;

use tracing::debug;

use super::errors::ApiResult;
use super::task_api::TaskUpdateApi;
use crate::cache::{QueryCache, QueryKey};
use crate::models::Task;

pub struct CachedTaskQueries {
    api: Arc<dyn TaskUpdateApi>,
    cache: Arc<dyn QueryCache>,
}

impl CachedTaskQueries {
    pub fn new(api: Arc<dyn TaskUpdateApi>, cache: Arc<dyn QueryCache>) -> Self {
        Self { api, cache }
    }

    /// Fetch one task, serving from cache when fresh.
    pub async fn task(&self, task_id: i64) -> ApiResult<Task> {
        let key = QueryKey::Task(task_id);
        if let Some(value) = self.cache.get(&key) {
            if let Ok(task) = serde_json::from_value::<Task>(value) {
                debug!(task_id, "task detail served from cache");
                return Ok(task);
            }
            // Unreadable cached payloads are treated as a miss
            self.cache.invalidate(&key);
        }

        let task = self.api.fetch_task(task_id).await?;
        if let Ok(value) = serde_json::to_value(&task) {
            self.cache.put(key, value);
        }
        Ok(task)
    }

    /// Fetch the engineer's assigned-task list, serving from cache when fresh.
    pub async fn assigned_tasks(&self, engineer_id: &str) -> ApiResult<Vec<Task>> {
        if let Some(value) = self.cache.get(&QueryKey::Tasks) {
            if let Ok(tasks) = serde_json::from_value::<Vec<Task>>(value) {
                debug!(engineer_id, "task list served from cache");
                return Ok(tasks);
            }
            self.cache.invalidate(&QueryKey::Tasks);
        }

        let tasks = self.api.fetch_assigned_tasks(engineer_id).await?;
        if let Ok(value) = serde_json::to_value(&tasks) {
            self.cache.put(QueryKey::Tasks, value);
        }
        Ok(tasks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::InMemoryQueryCache;
    use crate::state_machine::FieldTaskState;
    use crate::test_helpers::{sample_task, ScriptedTaskApi};

    #[tokio::test]
    async fn test_detail_miss_then_hit() {
        let api = Arc::new(ScriptedTaskApi::default());
        api.push_task(Ok(sample_task(42, FieldTaskState::StartTask)));
        let cache = Arc::new(InMemoryQueryCache::with_defaults());
        let queries = CachedTaskQueries::new(api.clone(), cache.clone());

        let first = queries.task(42).await.unwrap();
        assert_eq!(first.id, 42);

        // Second read must not hit the API; no response is queued.
        let second = queries.task(42).await.unwrap();
        assert_eq!(second.id, 42);
        assert_eq!(api.call_count(), 1);
    }

    #[tokio::test]
    async fn test_invalidation_forces_refetch() {
        let api = Arc::new(ScriptedTaskApi::default());
        api.push_task(Ok(sample_task(42, FieldTaskState::StartTask)));
        api.push_task(Ok(sample_task(42, FieldTaskState::WaitingForCustomer)));
        let cache = Arc::new(InMemoryQueryCache::with_defaults());
        let queries = CachedTaskQueries::new(api.clone(), cache.clone());

        let first = queries.task(42).await.unwrap();
        assert_eq!(first.status, FieldTaskState::StartTask);

        cache.invalidate(&QueryKey::Task(42));

        let second = queries.task(42).await.unwrap();
        assert_eq!(second.status, FieldTaskState::WaitingForCustomer);
        assert_eq!(api.call_count(), 2);
    }

    #[tokio::test]
    async fn test_assigned_list_uses_tasks_key() {
        let api = Arc::new(ScriptedTaskApi::default());
        api.push_task_list(Ok(vec![sample_task(1, FieldTaskState::AssignedToField)]));
        let cache = Arc::new(InMemoryQueryCache::with_defaults());
        let queries = CachedTaskQueries::new(api.clone(), cache.clone());

        let tasks = queries.assigned_tasks("eng-11").await.unwrap();
        assert_eq!(tasks.len(), 1);
        assert!(cache.get(&QueryKey::Tasks).is_some());
    }
}
