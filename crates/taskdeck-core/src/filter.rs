use crate::text_matcher::TextMatcher;
use crate::{Priority, Status, Task};

/// Ephemeral display constraints for the task collection.
///
/// Each field is independently optional; `None` (the UI's "All" selection or
/// a blank input) imposes no constraint. Present constraints combine with
/// logical AND. Filters are never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Restrict to a single status.
    pub status: Option<Status>,
    /// Restrict to a single priority.
    pub priority: Option<Priority>,
    /// Case-insensitive substring matched against any assignee.
    pub assignee: Option<String>,
    /// Case-insensitive substring matched against any tag.
    pub tag: Option<String>,
    /// Free-text search across all textual fields.
    pub text: Option<String>,
}

impl TaskFilter {
    /// Returns true when no constraint is present (the identity filter).
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.priority.is_none()
            && self.assignee.is_none()
            && self.tag.is_none()
            && self.text.is_none()
    }

    /// Determine whether the task satisfies every present constraint.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        if self.status.is_some_and(|status| task.status != status) {
            return false;
        }
        if self.priority.is_some_and(|priority| task.priority != priority) {
            return false;
        }
        if let Some(matcher) = self.assignee.as_deref().and_then(TextMatcher::new) {
            if !task.assignees.iter().any(|name| matcher.matches_str(name)) {
                return false;
            }
        }
        if let Some(matcher) = self.tag.as_deref().and_then(TextMatcher::new) {
            if !task.tags.iter().any(|tag| matcher.matches_str(tag)) {
                return false;
            }
        }
        if let Some(matcher) = self.text.as_deref().and_then(TextMatcher::new) {
            if !matcher.matches(task) {
                return false;
            }
        }
        true
    }
}

/// Builder that normalizes user-facing inputs into a [`TaskFilter`].
///
/// Blank or whitespace-only strings become `None`, so the UI can pass its
/// text inputs straight through.
#[derive(Debug, Clone, Default)]
pub struct TaskFilterBuilder {
    filter: TaskFilter,
}

impl TaskFilterBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to a status.
    #[must_use]
    pub const fn with_status(mut self, status: Status) -> Self {
        self.filter.status = Some(status);
        self
    }

    /// Restrict to a priority.
    #[must_use]
    pub const fn with_priority(mut self, priority: Priority) -> Self {
        self.filter.priority = Some(priority);
        self
    }

    /// Configure the assignee substring (blank inputs become `None`).
    #[must_use]
    pub fn with_assignee(mut self, assignee: &str) -> Self {
        self.filter.assignee = normalize(assignee);
        self
    }

    /// Configure the tag substring (blank inputs become `None`).
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.filter.tag = normalize(tag);
        self
    }

    /// Configure the free-text search (blank inputs become `None`).
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.filter.text = normalize(text);
        self
    }

    /// Build the final [`TaskFilter`].
    #[must_use]
    pub fn build(self) -> TaskFilter {
        self.filter
    }
}

fn normalize(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    fn task(title: &str, status: Status, priority: Priority) -> Task {
        Task::new(
            title,
            "",
            status,
            priority,
            datetime!(2024-04-01 00:00:00 UTC),
        )
    }

    #[test]
    fn blank_inputs_build_the_identity_filter() {
        let filter = TaskFilterBuilder::new()
            .with_assignee("")
            .with_tag("   ")
            .with_text("\n")
            .build();
        assert!(filter.is_empty());
        assert_eq!(filter, TaskFilter::default());
    }

    #[test]
    fn identity_filter_matches_everything() {
        let filter = TaskFilter::default();
        for status in Status::ALL {
            assert!(filter.matches(&task("any", status, Priority::Low)));
        }
    }

    #[test]
    fn constraints_combine_with_logical_and() {
        let mut matching = task("pay invoices", Status::Todo, Priority::High);
        matching.assignees.push("Erin".into());
        matching.tags.push("finance".into());

        let filter = TaskFilterBuilder::new()
            .with_status(Status::Todo)
            .with_priority(Priority::High)
            .with_assignee("erin")
            .with_tag("FIN")
            .with_text("invoice")
            .build();
        assert!(filter.matches(&matching));

        let mut wrong_priority = matching.clone();
        wrong_priority.priority = Priority::Low;
        assert!(!filter.matches(&wrong_priority));

        let mut wrong_tag = matching;
        wrong_tag.tags = vec!["ops".into()];
        assert!(!filter.matches(&wrong_tag));
    }

    #[test]
    fn assignee_match_is_substring_containment() {
        let mut task = task("t", Status::Blocked, Priority::Medium);
        task.assignees.push("Francesca Rossi".into());
        let filter = TaskFilterBuilder::new().with_assignee("rossi").build();
        assert!(filter.matches(&task));
    }
}
