use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// Lifecycle stage of a task.
///
/// The variant order is the board column order; `Ord` follows it so that
/// grouped views iterate columns left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Status {
    /// Task has not been started.
    #[serde(rename = "To Do")]
    Todo,
    /// Task is actively being worked on.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Task is finished.
    Completed,
    /// Task is blocked or waiting.
    Blocked,
}

/// Error produced when a status token cannot be recognized.
#[derive(Debug, Error)]
#[error("unknown status: {0}")]
pub struct ParseStatusError(String);

impl Status {
    /// Every status in board column order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Completed, Self::Blocked];

    /// Display string, identical to the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Blocked => "Blocked",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace(['-', ' '], "_");
        match normalized.as_str() {
            "to_do" | "todo" => Ok(Self::Todo),
            "in_progress" | "inprogress" => Ok(Self::InProgress),
            "completed" | "done" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            _ => Err(ParseStatusError(s.to_owned())),
        }
    }
}

/// Importance classification of a task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Priority {
    /// Can wait indefinitely.
    Low,
    /// Default priority.
    Medium,
    /// Should be picked up soon.
    High,
    /// Drop everything else.
    Urgent,
}

/// Error produced when a priority token cannot be recognized.
#[derive(Debug, Error)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(String);

impl Priority {
    /// Every priority in ascending order of importance.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Display string, identical to the wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ParsePriorityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "urgent" => Ok(Self::Urgent),
            _ => Err(ParsePriorityError(s.to_owned())),
        }
    }
}
