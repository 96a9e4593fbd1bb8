//! HTTP client for the Wizone task endpoints.
//!
//! The trait is the seam: the update submitter and the cached queries only
//! ever see `TaskUpdateApi`, so tests substitute a scripted double and the
//! HTTP implementation stays a thin transport adapter. Timeouts come from
//! configuration; this layer adds no retry of its own.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use super::errors::{ApiError, ApiResult};
use super::types::{ErrorPayload, FieldStatusUpdate, TaskCompletion};
use crate::config::WizoneConfig;
use crate::error::{Result, WizoneError};
use crate::models::Task;

/// Task endpoints used by the field workflow
#[async_trait]
pub trait TaskUpdateApi: Send + Sync {
    /// `POST /api/tasks/{id}/field-status`: non-completion status changes
    async fn update_field_status(
        &self,
        task_id: i64,
        update: FieldStatusUpdate,
    ) -> ApiResult<Task>;

    /// `POST /api/tasks/{id}/complete`: completion with note and files
    async fn complete_task(&self, task_id: i64, completion: TaskCompletion) -> ApiResult<Task>;

    /// `GET /api/tasks/{id}`: task detail
    async fn fetch_task(&self, task_id: i64) -> ApiResult<Task>;

    /// `GET /api/field-engineers/{id}/tasks`: the assigned-task list
    async fn fetch_assigned_tasks(&self, engineer_id: &str) -> ApiResult<Vec<Task>>;
}

/// `reqwest`-backed implementation of [`TaskUpdateApi`]
pub struct HttpTaskUpdateApi {
    client: Client,
    base_url: Url,
}

impl HttpTaskUpdateApi {
    /// Build a client from configuration.
    ///
    /// The base URL is normalized to end with `/` so endpoint paths join
    /// predictably.
    pub fn new(config: &WizoneConfig) -> Result<Self> {
        let mut base = config.api_base_url.clone();
        if !base.ends_with('/') {
            base.push('/');
        }
        let base_url = Url::parse(&base).map_err(|e| {
            WizoneError::ConfigurationError(format!("invalid api_base_url: {e}"))
        })?;

        let client = Client::builder()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| {
                WizoneError::ConfigurationError(format!("failed to build HTTP client: {e}"))
            })?;

        Ok(Self { client, base_url })
    }

    fn endpoint(&self, path: &str) -> ApiResult<Url> {
        self.base_url
            .join(path)
            .map_err(|e| ApiError::Transport(format!("invalid endpoint {path}: {e}")))
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + Sync,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(url = %url, "POST");
        let response = self
            .client
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn get_json<T>(&self, path: &str) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        debug!(url = %url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;
        Self::decode(response).await
    }

    async fn decode<T>(response: reqwest::Response) -> ApiResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();

        if status == StatusCode::UNAUTHORIZED {
            return Err(ApiError::AuthenticationExpired);
        }

        if !status.is_success() {
            let message = response
                .json::<ErrorPayload>()
                .await
                .map(|payload| payload.message)
                .ok()
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| {
                    status
                        .canonical_reason()
                        .unwrap_or("request failed")
                        .to_string()
                });
            return Err(ApiError::Server {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::InvalidResponse(e.to_string()))
    }
}

#[async_trait]
impl TaskUpdateApi for HttpTaskUpdateApi {
    async fn update_field_status(
        &self,
        task_id: i64,
        update: FieldStatusUpdate,
    ) -> ApiResult<Task> {
        self.post_json(&format!("api/tasks/{task_id}/field-status"), &update)
            .await
    }

    async fn complete_task(&self, task_id: i64, completion: TaskCompletion) -> ApiResult<Task> {
        self.post_json(&format!("api/tasks/{task_id}/complete"), &completion)
            .await
    }

    async fn fetch_task(&self, task_id: i64) -> ApiResult<Task> {
        self.get_json(&format!("api/tasks/{task_id}")).await
    }

    async fn fetch_assigned_tasks(&self, engineer_id: &str) -> ApiResult<Vec<Task>> {
        self.get_json(&format!("api/field-engineers/{engineer_id}/tasks"))
            .await
    }
}
