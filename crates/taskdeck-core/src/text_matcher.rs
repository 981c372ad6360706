use crate::Task;

/// Case-insensitive substring matcher for task fields.
#[derive(Debug, Clone)]
pub struct TextMatcher {
    needle: String,
}

impl TextMatcher {
    /// Normalize a query string into a matcher. Returns `None` for blank inputs.
    #[must_use]
    pub fn new(query: &str) -> Option<Self> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self {
            needle: trimmed.to_lowercase(),
        })
    }

    /// Determine whether any textual field on the task contains the query.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_str(&task.title)
            || self.matches_str(&task.description)
            || task.tags.iter().any(|tag| self.matches_str(tag))
            || task.assignees.iter().any(|name| self.matches_str(name))
            || task.comments.iter().any(|comment| self.matches_str(comment))
    }

    /// Determine whether a single string contains the query.
    #[must_use]
    pub fn matches_str(&self, value: &str) -> bool {
        value.to_lowercase().contains(&self.needle)
    }
}
