//! REST-backed storage implementation for taskdeck.
//!
//! Talks to a remote collection endpoint: `GET /tasks`, `POST /tasks`,
//! `PATCH /tasks/{id}`, `DELETE /tasks/{id}`. Tasks travel as JSON with
//! RFC 3339 timestamps; partial updates carry only the changed fields.

/// Error types for store operations.
pub mod error;

use std::time::Duration;

use reqwest::{Client, Response};
use taskdeck_core::{Task, TaskId, TaskPatch};
use tracing::{debug, info};

pub use error::HttpStoreError;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Storage based on a REST-ish collection endpoint.
#[derive(Debug, Clone)]
pub struct HttpStore {
    client: Client,
    base_url: String,
}

impl HttpStore {
    /// Build a store for the given base URL using a default client.
    ///
    /// The client applies a 30 second per-request timeout; failures surface
    /// through [`HttpStoreError::Request`].
    ///
    /// # Errors
    /// Returns an error when the base URL is not an absolute http(s) URL or
    /// the underlying client cannot be constructed.
    pub fn new(base_url: &str) -> Result<Self, HttpStoreError> {
        let client = Client::builder().timeout(DEFAULT_TIMEOUT).build()?;
        Self::with_client(client, base_url)
    }

    /// Build a store reusing an existing [`Client`].
    ///
    /// # Errors
    /// Returns an error when the base URL is not an absolute http(s) URL.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self, HttpStoreError> {
        let trimmed = base_url.trim().trim_end_matches('/');
        if !trimmed.starts_with("http://") && !trimmed.starts_with("https://") {
            return Err(HttpStoreError::InvalidBaseUrl(base_url.to_owned()));
        }
        Ok(Self {
            client,
            base_url: trimmed.to_owned(),
        })
    }

    /// Base URL this store talks to, without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn collection_url(&self) -> String {
        format!("{}/tasks", self.base_url)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}/tasks/{id}", self.base_url)
    }

    /// Fetch the entire remote task collection in endpoint order.
    ///
    /// # Errors
    /// Returns an error on transport failure, a non-success status, or an
    /// undecodable body.
    pub async fn list_tasks(&self) -> Result<Vec<Task>, HttpStoreError> {
        let url = self.collection_url();
        debug!(%url, "fetching task collection");
        let response = self.client.get(&url).send().await?;
        let response = ensure_success(response).await?;
        let tasks: Vec<Task> = response.json().await?;
        debug!(count = tasks.len(), "fetched task collection");
        Ok(tasks)
    }

    /// Create a task remotely and return the server's representation.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn create_task(&self, task: &Task) -> Result<Task, HttpStoreError> {
        let url = self.collection_url();
        debug!(%url, id = %task.id, "creating task");
        let response = self.client.post(&url).json(task).send().await?;
        let response = ensure_success(response).await?;
        let created: Task = response.json().await?;
        info!(id = %created.id, "created task");
        Ok(created)
    }

    /// Send a partial update and return the full updated task.
    ///
    /// The returned representation is authoritative; callers replace their
    /// local record with it to absorb any server-computed fields.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, HttpStoreError> {
        let url = self.task_url(id);
        debug!(%url, "patching task");
        let response = self.client.patch(&url).json(patch).send().await?;
        let response = ensure_success(response).await?;
        let updated: Task = response.json().await?;
        info!(id = %updated.id, "updated task");
        Ok(updated)
    }

    /// Request remote deletion of a task. Success means removal is confirmed.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-success status.
    pub async fn delete_task(&self, id: TaskId) -> Result<(), HttpStoreError> {
        let url = self.task_url(id);
        debug!(%url, "deleting task");
        let response = self.client.delete(&url).send().await?;
        ensure_success(response).await?;
        info!(%id, "deleted task");
        Ok(())
    }
}

async fn ensure_success(response: Response) -> Result<Response, HttpStoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(HttpStoreError::UnexpectedStatus { status, body })
}
