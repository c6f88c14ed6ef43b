//! Home overview: headline counters and the most recent tasks.

use serde::Serialize;

use crate::stats::compute_statistics;
use crate::tasks::Task;

/// Number of recent tasks shown when the config does not say otherwise.
pub const DEFAULT_RECENT_LIMIT: usize = 4;

/// Data behind the home screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Overview<'a> {
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub pending_tasks: usize,
    pub completion_rate: u32,
    /// Leading tasks of the collection, which is kept newest first.
    pub recent_tasks: Vec<&'a Task>,
}

impl<'a> Overview<'a> {
    /// Build the overview from a task collection.
    #[must_use]
    pub fn build(tasks: &'a [Task], recent_limit: usize) -> Self {
        let stats = compute_statistics(tasks);
        Self {
            total_tasks: stats.total,
            completed_tasks: stats.completed,
            pending_tasks: stats.pending,
            completion_rate: stats.completion_rate,
            recent_tasks: tasks.iter().take(recent_limit).collect(),
        }
    }
}
