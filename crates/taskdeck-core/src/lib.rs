//! Domain types and board projections for taskdeck.

/// Pure projections for board rendering.
pub mod board;
/// Filter specification and builder.
pub mod filter;
/// Identifier types.
pub mod id;
/// Partial-update payloads.
pub mod patch;
/// Closed status and priority sets.
pub mod status;
/// Case-insensitive text search.
pub mod text_matcher;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

pub use board::{apply_filter, group_by_status};
pub use filter::{TaskFilter, TaskFilterBuilder};
pub use id::TaskId;
pub use patch::TaskPatch;
pub use status::{ParsePriorityError, ParseStatusError, Priority, Status};
pub use text_matcher::TextMatcher;

/// A single checklist entry on a task.
///
/// The wire field for the entry text is `"task"` for compatibility with the
/// collection endpoint's existing payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChecklistItem {
    /// Entry text.
    #[serde(rename = "task")]
    pub text: String,
    /// Whether the entry has been ticked off.
    pub done: bool,
}

/// A unit of work with status, priority, assignment, and scheduling metadata.
///
/// The collection invariant is that `id` uniquely identifies a task; ids are
/// client-assigned at creation ([`TaskId::new`]) or taken verbatim from the
/// remote endpoint when hydrating. Collection order is insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Unique identifier, never reused.
    pub id: TaskId,
    /// Human-readable title.
    pub title: String,
    /// Free-text description.
    pub description: String,
    /// Current lifecycle stage.
    pub status: Status,
    /// Importance classification.
    pub priority: Priority,
    /// Creation timestamp, RFC 3339 on the wire.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Due timestamp, RFC 3339 on the wire.
    #[serde(with = "time::serde::rfc3339")]
    pub due_date: OffsetDateTime,
    /// Assigned display names, ordered, duplicates permitted.
    #[serde(default)]
    pub assignees: Vec<String>,
    /// Label strings, ordered.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Free-text comments, ordered.
    #[serde(default)]
    pub comments: Vec<String>,
    /// Checklist entries, ordered.
    #[serde(default)]
    pub checklist: Vec<ChecklistItem>,
}

impl Task {
    /// Create a task with a fresh id and creation timestamp.
    ///
    /// Comments and checklist start empty; the creation form never supplies
    /// them.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        status: Status,
        priority: Priority,
        due_date: OffsetDateTime,
    ) -> Self {
        Self {
            id: TaskId::new(),
            title: title.into(),
            description: description.into(),
            status,
            priority,
            created_at: OffsetDateTime::now_utc(),
            due_date,
            assignees: Vec::new(),
            tags: Vec::new(),
            comments: Vec::new(),
            checklist: Vec::new(),
        }
    }
}
