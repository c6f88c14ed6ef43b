//! Task list filtering.
//!
//! A task is kept when it matches the search term, the priority filter and
//! the status filter. The search term is matched case-insensitively against
//! the title and the description; an empty term matches every task.

use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TaskFlowError;
use crate::tasks::{Priority, Task};

/// Priority selection for the task list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum PriorityFilter {
    /// Every priority, including unrecognized ones.
    #[default]
    All,
    /// Only tasks with this priority.
    Only(Priority),
}

impl FromStr for PriorityFilter {
    type Err = TaskFlowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Self::All);
        }
        s.parse().map(Self::Only)
    }
}

/// Completion state selection for the task list.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    /// Completed and pending tasks.
    #[default]
    All,
    /// Only completed tasks.
    Completed,
    /// Only pending tasks.
    Pending,
}

/// Combined list filter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub search: String,
    pub priority: PriorityFilter,
    pub status: StatusFilter,
}

impl TaskFilter {
    /// Check a single task against every predicate.
    #[must_use]
    pub fn matches(&self, task: &Task) -> bool {
        self.matches_search(task) && self.matches_priority(task) && self.matches_status(task)
    }

    /// Keep the matching tasks, preserving their order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task]) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t)).collect()
    }

    fn matches_search(&self, task: &Task) -> bool {
        let needle = self.search.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
    }

    fn matches_priority(&self, task: &Task) -> bool {
        match &self.priority {
            PriorityFilter::All => true,
            PriorityFilter::Only(p) => &task.priority == p,
        }
    }

    const fn matches_status(&self, task: &Task) -> bool {
        match self.status {
            StatusFilter::All => true,
            StatusFilter::Completed => task.completed,
            StatusFilter::Pending => !task.completed,
        }
    }
}
