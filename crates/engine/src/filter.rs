//! Pre-filtering of raw tasks into keep / delegated / dropped buckets.

use std::collections::HashSet;

use prio_core::Task;

/// Owner names that mean "the acting user".
pub const DEFAULT_SELF_ALIASES: &[&str] = &["ja", "já", "me", "mne", "moje", "i"];

/// Result of pre-filtering. Each bucket keeps input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Partition {
    /// Tasks to score
    pub keep: Vec<Task>,
    /// Tasks owned by someone else
    pub delegated: Vec<Task>,
    /// Low-value, low-leverage, high-cost tasks
    pub dropped: Vec<Task>,
}

impl Partition {
    /// Number of tasks across all buckets.
    pub fn len(&self) -> usize {
        self.keep.len() + self.delegated.len() + self.dropped.len()
    }

    /// Whether all buckets are empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Splits a batch before scoring.
#[derive(Debug, Clone)]
pub struct TaskPreFilter {
    self_aliases: HashSet<String>,
}

impl TaskPreFilter {
    /// Create a filter with the default self aliases.
    pub fn new() -> Self {
        Self::with_aliases(DEFAULT_SELF_ALIASES.iter().copied())
    }

    /// Create a filter recognising the given owner names as the acting user.
    pub fn with_aliases<I, S>(aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            self_aliases: aliases
                .into_iter()
                .map(|a| a.as_ref().trim().to_lowercase())
                .collect(),
        }
    }

    /// Whether `owner` is the acting user.
    pub fn is_self(&self, owner: &str) -> bool {
        self.self_aliases.contains(&owner.trim().to_lowercase())
    }

    /// Whether a task is never worth doing.
    pub fn is_droppable(task: &Task) -> bool {
        task.impact <= 1.0 && task.leverage <= 1.0 && task.effort >= 3.0
    }

    /// Partition tasks. Delegation is checked before dropping.
    pub fn filter(&self, tasks: Vec<Task>) -> Partition {
        let mut partition = Partition::default();
        for task in tasks {
            if !self.is_self(&task.owner) {
                partition.delegated.push(task);
            } else if Self::is_droppable(&task) {
                partition.dropped.push(task);
            } else {
                partition.keep.push(task);
            }
        }
        partition
    }
}

impl Default for TaskPreFilter {
    fn default() -> Self {
        Self::new()
    }
}
