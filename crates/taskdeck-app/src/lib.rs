//! Application layer for taskdeck.
//!
//! This crate provides the board store, the async remote seam, local
//! persistence, and configuration for hosts embedding the board.

pub mod config;
pub mod remote;
pub mod storage;
pub mod store;

// Re-exports for convenience
pub use config::{BoardConfig, RemoteConfig, StorageConfig};
pub use remote::RemoteTasks;
pub use storage::{BoardStorage, DEFAULT_STORAGE_FILE, ROOT_KEY, StorageError};
pub use store::{BoardState, BoardStore};
