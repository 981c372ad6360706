//! Pure projections turning the task collection into render-ready views.
//!
//! Nothing here mutates the collection: the board recomputes these on every
//! render from the latest store state. Column membership is derived from each
//! task's status, never stored.

use std::collections::BTreeMap;

use crate::{Status, Task, TaskFilter};

/// Partition tasks into per-status columns, preserving relative order.
///
/// Every status key is present even when its column is empty, and every task
/// lands in exactly one column. Iterating the map visits columns in board
/// order because [`Status`] orders that way.
#[must_use]
pub fn group_by_status(tasks: &[Task]) -> BTreeMap<Status, Vec<Task>> {
    let mut columns: BTreeMap<Status, Vec<Task>> =
        Status::ALL.iter().map(|status| (*status, Vec::new())).collect();
    for task in tasks {
        columns.entry(task.status).or_default().push(task.clone());
    }
    columns
}

/// Return the ordered sub-sequence of tasks satisfying every filter constraint.
#[must_use]
pub fn apply_filter(tasks: &[Task], filter: &TaskFilter) -> Vec<Task> {
    tasks.iter().filter(|task| filter.matches(task)).cloned().collect()
}
