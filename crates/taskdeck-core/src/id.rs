use serde::{Deserialize, Serialize};
use std::{fmt, num::ParseIntError, str::FromStr};
use time::OffsetDateTime;

/// Identifier of a task: unix wall-clock milliseconds at creation time.
///
/// Ids are assigned once and never reused. Creating two tasks within the same
/// millisecond is outside the collection's write rate in practice; callers
/// that need stronger guarantees must supply their own ids via
/// [`TaskId::from_millis`].
#[derive(Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(i64);

impl TaskId {
    /// Generate a fresh identifier from the current wall clock.
    #[must_use]
    pub fn new() -> Self {
        let nanos = OffsetDateTime::now_utc().unix_timestamp_nanos();
        Self(i64::try_from(nanos / 1_000_000).unwrap_or(i64::MAX))
    }

    /// Wrap an already assigned millisecond timestamp.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Millisecond value backing this identifier.
    #[must_use]
    pub const fn as_millis(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TaskId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_ids_are_positive_milliseconds() {
        let id = TaskId::new();
        // Any clock after 2020 is comfortably above this bound.
        assert!(id.as_millis() > 1_500_000_000_000);
    }

    #[test]
    fn id_display_and_parse_roundtrip() {
        let id = TaskId::from_millis(1_700_000_000_123);
        let parsed: TaskId = id.to_string().parse().unwrap_or_else(|err| panic!("must parse id: {err}"));
        assert_eq!(parsed, id);
    }

    #[test]
    fn id_serializes_as_number() {
        let id = TaskId::from_millis(42);
        let json = serde_json::to_string(&id).unwrap_or_else(|err| panic!("must serialize id: {err}"));
        assert_eq!(json, "42");
    }

    #[test]
    fn ids_order_by_creation_time() {
        assert!(TaskId::from_millis(1) < TaskId::from_millis(2));
    }
}
