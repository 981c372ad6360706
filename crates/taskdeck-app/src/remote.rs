//! Async seam between the board store and the remote collection endpoint.

use std::sync::Arc;

use anyhow::Error;
use taskdeck_core::{Task, TaskId, TaskPatch};
use taskdeck_store_http::{HttpStore, HttpStoreError};

/// Async access to the remote task collection.
///
/// The board store is generic over this trait so tests can substitute an
/// in-memory endpoint. [`HttpStore`] is the production implementation.
#[allow(async_fn_in_trait)]
pub trait RemoteTasks: Send + Sync {
    /// Error type bubbled up from the backing endpoint.
    type Error: Into<Error> + Send;

    /// Fetch the entire remote collection in endpoint order.
    ///
    /// # Errors
    /// Returns an endpoint-specific error when the read fails.
    async fn list_tasks(&self) -> Result<Vec<Task>, Self::Error>;

    /// Create a task remotely and return the server's representation.
    ///
    /// # Errors
    /// Returns an endpoint-specific error when the create fails.
    async fn create_task(&self, task: &Task) -> Result<Task, Self::Error>;

    /// Send a partial update and return the full updated task.
    ///
    /// # Errors
    /// Returns an endpoint-specific error when the update fails.
    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, Self::Error>;

    /// Request remote deletion; success means removal is confirmed.
    ///
    /// # Errors
    /// Returns an endpoint-specific error when the delete fails.
    async fn delete_task(&self, id: TaskId) -> Result<(), Self::Error>;
}

// Sharing an endpoint between a store and other observers keeps working
// through an `Arc`.
impl<T: RemoteTasks> RemoteTasks for Arc<T> {
    type Error = T::Error;

    async fn list_tasks(&self) -> Result<Vec<Task>, Self::Error> {
        T::list_tasks(self).await
    }

    async fn create_task(&self, task: &Task) -> Result<Task, Self::Error> {
        T::create_task(self, task).await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, Self::Error> {
        T::update_task(self, id, patch).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), Self::Error> {
        T::delete_task(self, id).await
    }
}

impl RemoteTasks for HttpStore {
    type Error = HttpStoreError;

    async fn list_tasks(&self) -> Result<Vec<Task>, Self::Error> {
        Self::list_tasks(self).await
    }

    async fn create_task(&self, task: &Task) -> Result<Task, Self::Error> {
        Self::create_task(self, task).await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, Self::Error> {
        Self::update_task(self, id, patch).await
    }

    async fn delete_task(&self, id: TaskId) -> Result<(), Self::Error> {
        Self::delete_task(self, id).await
    }
}
