//! Durable client-side persistence for the task collection.
//!
//! Only tasks are persisted; filter and theme state never reach disk. The
//! document lives under a fixed root key so the board can be restored on
//! startup from a single well-known entry.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use taskdeck_core::Task;
use thiserror::Error;
use tracing::debug;

/// Fixed root key the persisted document is stored under.
pub const ROOT_KEY: &str = "root";

/// Default file name for the persisted board.
pub const DEFAULT_STORAGE_FILE: &str = "taskdeck.json";

/// Errors that can occur while loading or saving the board.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Reading or writing the storage file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be encoded or decoded.
    #[error("Codec error: {0}")]
    Codec(#[from] serde_json::Error),
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedDocument {
    #[serde(rename = "root", default)]
    board: PersistedBoard,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct PersistedBoard {
    #[serde(default)]
    tasks: Vec<Task>,
}

/// File-backed storage for the task collection.
#[derive(Debug, Clone)]
pub struct BoardStorage {
    path: PathBuf,
}

impl BoardStorage {
    /// Create storage at an explicit file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create storage using the default file name inside `dir`.
    #[must_use]
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self {
            path: dir.as_ref().join(DEFAULT_STORAGE_FILE),
        }
    }

    /// Path of the storage file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Restore the persisted task collection.
    ///
    /// A missing file restores an empty board; that is the normal first-run
    /// case, not an error.
    ///
    /// # Errors
    /// Returns an error when the file exists but cannot be read or parsed.
    pub fn load(&self) -> Result<Vec<Task>, StorageError> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no persisted board, starting empty");
            return Ok(Vec::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        let document: PersistedDocument = serde_json::from_str(&contents)?;
        debug!(count = document.board.tasks.len(), "restored persisted board");
        Ok(document.board.tasks)
    }

    /// Persist the task collection, replacing any previous document.
    ///
    /// The write goes through a temporary file and a rename so a crash never
    /// leaves a half-written document behind.
    ///
    /// # Errors
    /// Returns an error when encoding or writing fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let document = PersistedDocument {
            board: PersistedBoard {
                tasks: tasks.to_vec(),
            },
        };
        let data = serde_json::to_string_pretty(&document)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, data)?;
        fs::rename(&tmp, &self.path)?;
        debug!(count = tasks.len(), path = %self.path.display(), "persisted board");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used)]

    use super::*;
    use taskdeck_core::{Priority, Status};
    use tempfile::TempDir;
    use time::macros::datetime;

    fn sample_tasks() -> Vec<Task> {
        vec![
            Task::new(
                "persisted",
                "survives restarts",
                Status::Todo,
                Priority::Low,
                datetime!(2024-08-01 00:00:00 UTC),
            ),
            Task::new(
                "another",
                "",
                Status::Blocked,
                Priority::Urgent,
                datetime!(2024-08-02 00:00:00 UTC),
            ),
        ]
    }

    #[test]
    fn missing_file_restores_an_empty_board() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let storage = BoardStorage::in_dir(dir.path());
        let tasks = storage.load().unwrap_or_else(|err| panic!("load: {err}"));
        assert!(tasks.is_empty());
    }

    #[test]
    fn save_then_load_roundtrips_the_collection() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let storage = BoardStorage::in_dir(dir.path());
        let tasks = sample_tasks();
        storage.save(&tasks).unwrap_or_else(|err| panic!("save: {err}"));
        let restored = storage.load().unwrap_or_else(|err| panic!("load: {err}"));
        assert_eq!(restored, tasks);
    }

    #[test]
    fn document_nests_tasks_under_the_root_key() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let storage = BoardStorage::in_dir(dir.path());
        storage
            .save(&sample_tasks())
            .unwrap_or_else(|err| panic!("save: {err}"));

        let raw = std::fs::read_to_string(storage.path())
            .unwrap_or_else(|err| panic!("read: {err}"));
        let value: serde_json::Value =
            serde_json::from_str(&raw).unwrap_or_else(|err| panic!("parse: {err}"));
        assert!(value.get(ROOT_KEY).is_some());
        assert_eq!(value[ROOT_KEY]["tasks"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn corrupt_document_is_an_error_not_a_reset() {
        let dir = TempDir::new().unwrap_or_else(|err| panic!("tempdir: {err}"));
        let storage = BoardStorage::in_dir(dir.path());
        std::fs::write(storage.path(), "not json").unwrap_or_else(|err| panic!("write: {err}"));
        assert!(matches!(storage.load(), Err(StorageError::Codec(_))));
    }
}
