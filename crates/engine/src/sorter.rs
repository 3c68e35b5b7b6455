//! Backlog ordering.

use std::cmp::Ordering;

use chrono::NaiveDate;
use prio_core::Task;

/// Orders computed tasks.
pub trait TaskSorter: Send + Sync {
    /// Sort tasks, highest priority first.
    fn sort(&self, tasks: Vec<Task>) -> Vec<Task>;
}

/// Score descending, then deadline ascending (none last), then impact
/// descending. Stable, so full ties keep input order.
#[derive(Debug, Clone, Copy, Default)]
pub struct BacklogSorter;

impl BacklogSorter {
    /// Comparison used by [`BacklogSorter::sort`].
    pub fn compare(a: &Task, b: &Task) -> Ordering {
        let deadline = |t: &Task| t.deadline.unwrap_or(NaiveDate::MAX);

        b.score
            .total_cmp(&a.score)
            .then_with(|| deadline(a).cmp(&deadline(b)))
            .then_with(|| b.impact.total_cmp(&a.impact))
    }
}

impl TaskSorter for BacklogSorter {
    fn sort(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.sort_by(Self::compare);
        tasks
    }
}
