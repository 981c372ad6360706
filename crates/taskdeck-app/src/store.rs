//! The board store: authoritative in-memory task collection plus
//! optimistic and confirmed mutation paths.

use taskdeck_core::{Status, Task, TaskId, TaskPatch};
use tokio::sync::watch;
use tracing::{debug, warn};

use crate::remote::RemoteTasks;

/// Observable store state.
///
/// `loading` is a single flag shared by every in-flight async operation; a
/// fast-finishing delete clears it even while a slower fetch is pending.
/// That matches the modeled behavior of the original board and is accepted
/// rather than tracked per operation.
#[derive(Debug, Clone, Default)]
pub struct BoardState {
    /// The task collection, in insertion order.
    pub tasks: Vec<Task>,
    /// Whether any async operation is pending.
    pub loading: bool,
    /// Message of the last rejected async operation, cleared when a new one starts.
    pub error: Option<String>,
}

/// Store owning the task collection, generic over the remote endpoint.
///
/// Construct one explicitly and pass it by reference; there is no process-wide
/// singleton. Every mutation, synchronous or async-completion, goes through
/// the single [`watch`] channel, so mutations are serialized and subscribers
/// observe each change.
#[derive(Debug)]
pub struct BoardStore<R> {
    remote: R,
    state: watch::Sender<BoardState>,
}

impl<R> BoardStore<R> {
    /// Create a store with an empty collection.
    #[must_use]
    pub fn new(remote: R) -> Self {
        Self::with_tasks(remote, Vec::new())
    }

    /// Create a store hydrated with previously persisted tasks.
    #[must_use]
    pub fn with_tasks(remote: R, tasks: Vec<Task>) -> Self {
        let (state, _) = watch::channel(BoardState {
            tasks,
            loading: false,
            error: None,
        });
        Self { remote, state }
    }

    /// Subscribe to state changes. The receiver starts at the current state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<BoardState> {
        self.state.subscribe()
    }

    /// Clone of the current state.
    #[must_use]
    pub fn snapshot(&self) -> BoardState {
        self.state.borrow().clone()
    }

    /// Clone of the current task collection.
    #[must_use]
    pub fn tasks(&self) -> Vec<Task> {
        self.state.borrow().tasks.clone()
    }

    /// Append a task to the collection.
    ///
    /// The id generation scheme guarantees uniqueness; no duplicate check is
    /// performed here.
    pub fn add_task(&self, task: Task) {
        debug!(id = %task.id, "adding task");
        self.state.send_modify(|state| state.tasks.push(task));
    }

    /// Remove the task with the given id. Silent no-op when absent.
    pub fn remove_task(&self, id: TaskId) {
        self.state.send_if_modified(|state| {
            let before = state.tasks.len();
            state.tasks.retain(|task| task.id != id);
            state.tasks.len() != before
        });
    }

    /// Merge a partial update into the matching task. Silent no-op when the
    /// id is absent or the patch is empty.
    pub fn update_task(&self, id: TaskId, patch: &TaskPatch) {
        if patch.is_empty() {
            return;
        }
        self.state.send_if_modified(|state| {
            state
                .tasks
                .iter_mut()
                .find(|task| task.id == id)
                .is_some_and(|task| {
                    patch.apply(task);
                    true
                })
        });
    }

    /// Set the status of the matching task, leaving every other field and
    /// the task's position untouched. Silent no-op when absent.
    ///
    /// This is the drag-and-drop contract: column membership is derived from
    /// `status`, so moving a card across columns is a status write only.
    pub fn move_task(&self, id: TaskId, status: Status) {
        self.state.send_if_modified(|state| {
            state
                .tasks
                .iter_mut()
                .find(|task| task.id == id)
                .is_some_and(|task| {
                    task.status = status;
                    true
                })
        });
    }

    fn begin_operation(&self) {
        self.state.send_modify(|state| {
            state.loading = true;
            state.error = None;
        });
    }

    fn reject_operation(&self, message: String) {
        warn!(%message, "remote operation rejected");
        self.state.send_modify(|state| {
            state.loading = false;
            state.error = Some(message);
        });
    }
}

impl<R: RemoteTasks> BoardStore<R> {
    /// Replace the collection with the remote one.
    ///
    /// While pending the store is loading; on failure the prior collection is
    /// retained and the error message recorded. There is no request
    /// sequencing: when fetches overlap, the last one to resolve wins, even
    /// if its response is the older of the two.
    pub async fn fetch_all(&self) {
        self.begin_operation();
        match self.remote.list_tasks().await {
            Ok(tasks) => self.state.send_modify(|state| {
                state.loading = false;
                state.tasks = tasks;
            }),
            Err(err) => {
                let err: anyhow::Error = err.into();
                self.reject_operation(format!("failed to fetch tasks: {err}"));
            }
        }
    }

    /// Send a partial update to the remote endpoint and, once confirmed,
    /// replace the local record with the server's returned representation.
    ///
    /// The confirmed result overwrites any optimistic local edit for the same
    /// id, absorbing server-computed fields. On failure the local collection
    /// is left unchanged and the error message recorded.
    pub async fn persist_update(&self, id: TaskId, patch: &TaskPatch) {
        self.begin_operation();
        match self.remote.update_task(id, patch).await {
            Ok(updated) => self.state.send_modify(|state| {
                state.loading = false;
                if let Some(task) = state.tasks.iter_mut().find(|task| task.id == updated.id) {
                    *task = updated;
                }
            }),
            Err(err) => {
                let err: anyhow::Error = err.into();
                self.reject_operation(format!("failed to update task: {err}"));
            }
        }
    }

    /// Request remote deletion and remove the local record only after the
    /// endpoint confirms. On failure the record remains and the error message
    /// is recorded.
    pub async fn persist_delete(&self, id: TaskId) {
        self.begin_operation();
        match self.remote.delete_task(id).await {
            Ok(()) => self.state.send_modify(|state| {
                state.loading = false;
                state.tasks.retain(|task| task.id != id);
            }),
            Err(err) => {
                let err: anyhow::Error = err.into();
                self.reject_operation(format!("failed to delete task: {err}"));
            }
        }
    }

    /// Create a task remotely and append the server's representation once
    /// confirmed. On failure nothing is appended and the error message is
    /// recorded.
    pub async fn persist_create(&self, task: Task) {
        self.begin_operation();
        match self.remote.create_task(&task).await {
            Ok(created) => self.state.send_modify(|state| {
                state.loading = false;
                state.tasks.push(created);
            }),
            Err(err) => {
                let err: anyhow::Error = err.into();
                self.reject_operation(format!("failed to create task: {err}"));
            }
        }
    }
}
