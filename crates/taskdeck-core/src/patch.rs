use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

use crate::{ChecklistItem, Priority, Status, Task};

/// Partial update for a task.
///
/// Every field is an optional mirror of the mutable [`Task`] fields; `id` and
/// `created_at` are deliberately absent, so a patch can never change a task's
/// identity or history. Serializing a patch emits only the `Some` fields,
/// which is exactly the body a `PATCH /tasks/{id}` request carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct TaskPatch {
    /// Overwrite the title.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Overwrite the description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Overwrite the lifecycle stage.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    /// Overwrite the priority.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    /// Overwrite the due timestamp.
    #[serde(with = "time::serde::rfc3339::option", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<OffsetDateTime>,
    /// Replace the assignee list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignees: Option<Vec<String>>,
    /// Replace the tag list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    /// Replace the comment list.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comments: Option<Vec<String>>,
    /// Replace the checklist.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checklist: Option<Vec<ChecklistItem>>,
}

impl TaskPatch {
    /// Returns true when applying the patch would change nothing.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.status.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
            && self.assignees.is_none()
            && self.tags.is_none()
            && self.comments.is_none()
            && self.checklist.is_none()
    }

    /// Merge the `Some` fields into `task`, leaving the rest untouched.
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title.clone_from(title);
        }
        if let Some(description) = &self.description {
            task.description.clone_from(description);
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
        if let Some(assignees) = &self.assignees {
            task.assignees.clone_from(assignees);
        }
        if let Some(tags) = &self.tags {
            task.tags.clone_from(tags);
        }
        if let Some(comments) = &self.comments {
            task.comments.clone_from(comments);
        }
        if let Some(checklist) = &self.checklist {
            task.checklist.clone_from(checklist);
        }
    }

    /// Compute the minimal patch turning `current` into `desired`.
    ///
    /// Identity fields are ignored; a field appears in the patch only when it
    /// differs between the two tasks.
    #[must_use]
    pub fn diff(current: &Task, desired: &Task) -> Self {
        let mut patch = Self::default();
        if current.title != desired.title {
            patch.title = Some(desired.title.clone());
        }
        if current.description != desired.description {
            patch.description = Some(desired.description.clone());
        }
        if current.status != desired.status {
            patch.status = Some(desired.status);
        }
        if current.priority != desired.priority {
            patch.priority = Some(desired.priority);
        }
        if current.due_date != desired.due_date {
            patch.due_date = Some(desired.due_date);
        }
        if current.assignees != desired.assignees {
            patch.assignees = Some(desired.assignees.clone());
        }
        if current.tags != desired.tags {
            patch.tags = Some(desired.tags.clone());
        }
        if current.comments != desired.comments {
            patch.comments = Some(desired.comments.clone());
        }
        if current.checklist != desired.checklist {
            patch.checklist = Some(desired.checklist.clone());
        }
        patch
    }

    /// Convenience patch that changes only the status.
    #[must_use]
    pub fn status_only(status: Status) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn base_task() -> Task {
        let mut task = Task::new(
            "Draft release notes",
            "Cover the sync changes",
            Status::Todo,
            Priority::Medium,
            datetime!(2024-05-01 12:00:00 UTC),
        );
        task.tags.push("docs".into());
        task
    }

    #[test]
    fn empty_patch_changes_nothing() {
        let mut task = base_task();
        let original = task.clone();
        let patch = TaskPatch::default();
        assert!(patch.is_empty());
        patch.apply(&mut task);
        assert_eq!(task, original);
    }

    #[test]
    fn apply_merges_only_supplied_fields() {
        let mut task = base_task();
        let patch = TaskPatch {
            title: Some("Draft v2 release notes".into()),
            priority: Some(Priority::High),
            ..TaskPatch::default()
        };
        patch.apply(&mut task);
        assert_eq!(task.title, "Draft v2 release notes");
        assert_eq!(task.priority, Priority::High);
        // Everything else keeps its prior value.
        assert_eq!(task.status, Status::Todo);
        assert_eq!(task.tags, vec!["docs".to_owned()]);
    }

    #[test]
    fn diff_emits_only_changed_fields() {
        let current = base_task();
        let mut desired = current.clone();
        desired.status = Status::Completed;
        desired.assignees.push("dana".into());

        let patch = TaskPatch::diff(&current, &desired);
        assert_eq!(patch.status, Some(Status::Completed));
        assert_eq!(patch.assignees, Some(vec!["dana".to_owned()]));
        assert!(patch.title.is_none());
        assert!(patch.due_date.is_none());
    }

    #[test]
    fn diff_of_identical_tasks_is_empty() {
        let task = base_task();
        assert!(TaskPatch::diff(&task, &task).is_empty());
    }

    #[test]
    fn serialization_skips_absent_fields() {
        let empty = serde_json::to_string(&TaskPatch::default())
            .unwrap_or_else(|err| panic!("must serialize: {err}"));
        assert_eq!(empty, "{}");

        let status_only = serde_json::to_string(&TaskPatch::status_only(Status::Blocked))
            .unwrap_or_else(|err| panic!("must serialize: {err}"));
        assert_eq!(status_only, r#"{"status":"Blocked"}"#);
    }

    #[test]
    fn patch_roundtrips_through_wire_form() {
        let patch = TaskPatch {
            due_date: Some(datetime!(2024-07-04 08:00:00 UTC)),
            tags: Some(vec!["urgent".into()]),
            ..TaskPatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap_or_else(|err| panic!("must serialize: {err}"));
        let back: TaskPatch =
            serde_json::from_str(&json).unwrap_or_else(|err| panic!("must parse: {err}"));
        assert_eq!(back, patch);
    }
}
