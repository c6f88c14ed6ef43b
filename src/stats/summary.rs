//! Task statistics aggregation.
//!
//! [`compute_statistics`] is a single linear pass over a task slice. It keeps
//! no state between calls and never mutates its input, so the same slice can
//! be summarized from several places at once.
//!
//! Percentages and averages are rounded to the nearest integer with halves
//! going towards positive infinity (`2.5 -> 3`, `-2.5 -> -2`). Both are computed
//! in integer arithmetic so results never depend on float representation.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::tasks::{Priority, Task};

/// Completed/total counters for one group of tasks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    pub total: usize,
    pub completed: usize,
}

impl Bucket {
    fn record(&mut self, completed: bool) {
        self.total += 1;
        if completed {
            self.completed += 1;
        }
    }

    #[must_use]
    pub const fn pending(&self) -> usize {
        self.total - self.completed
    }

    /// Completion percentage of this bucket, 0 when empty.
    #[must_use]
    pub fn rate(&self) -> u32 {
        percent(self.completed, self.total)
    }
}

/// One bucket per recognized priority. All three are always present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityStats {
    pub high: Bucket,
    pub medium: Bucket,
    pub low: Bucket,
}

impl PriorityStats {
    fn get_mut(&mut self, priority: &Priority) -> Option<&mut Bucket> {
        match priority {
            Priority::High => Some(&mut self.high),
            Priority::Medium => Some(&mut self.medium),
            Priority::Low => Some(&mut self.low),
            Priority::Unrecognized(_) => None,
        }
    }

    /// Buckets in display order, highest priority first.
    pub fn iter(&self) -> impl Iterator<Item = (Priority, Bucket)> {
        [
            (Priority::High, self.high),
            (Priority::Medium, self.medium),
            (Priority::Low, self.low),
        ]
        .into_iter()
    }

    /// Tasks counted across the three buckets.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.high.total + self.medium.total + self.low.total
    }
}

/// Aggregate statistics over a task collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskStatistics {
    /// Number of tasks.
    pub total: usize,
    /// Tasks marked completed.
    pub completed: usize,
    /// Tasks not marked completed.
    pub pending: usize,
    /// Completed share of all tasks, as a whole percentage.
    pub completion_rate: u32,
    /// Counters per recognized priority.
    pub priority_stats: PriorityStats,
    /// Tasks whose priority is not low, medium or high; not in any priority bucket.
    pub unrecognized_priority: usize,
    /// Counters per category, in order of first appearance.
    pub category_stats: IndexMap<String, Bucket>,
    /// Mean days from creation to completion over completed tasks with a
    /// completion date.
    pub avg_completion_time: i64,
}

/// Summarize a task collection.
///
/// Empty input yields an all-zero summary with three empty priority buckets
/// and no categories. Completion spans are taken as-is: a task completed
/// before it was created contributes a negative day count.
#[must_use]
pub fn compute_statistics(tasks: &[Task]) -> TaskStatistics {
    let mut priority_stats = PriorityStats::default();
    let mut unrecognized_priority = 0;
    let mut category_stats: IndexMap<String, Bucket> = IndexMap::new();
    let mut completed = 0;
    let mut span_sum: i64 = 0;
    let mut span_count: i64 = 0;

    for task in tasks {
        if task.completed {
            completed += 1;
        }

        match priority_stats.get_mut(&task.priority) {
            Some(bucket) => bucket.record(task.completed),
            None => unrecognized_priority += 1,
        }

        category_stats
            .entry(task.category.clone())
            .or_default()
            .record(task.completed);

        if let Some(days) = task.completion_days() {
            span_sum += days;
            span_count += 1;
        }
    }

    let total = tasks.len();
    let avg_completion_time = if span_count == 0 {
        0
    } else {
        round_div(span_sum, span_count)
    };

    TaskStatistics {
        total,
        completed,
        pending: total - completed,
        completion_rate: percent(completed, total),
        priority_stats,
        unrecognized_priority,
        category_stats,
        avg_completion_time,
    }
}

/// `part / whole * 100`, rounded half up; 0 when `whole` is 0.
#[must_use]
pub fn percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        return 0;
    }
    let (part, whole) = (part as u64, whole as u64);
    let rounded = (part * 200 + whole) / (2 * whole);
    u32::try_from(rounded).unwrap_or(u32::MAX)
}

/// `num / den` rounded to the nearest integer, halves towards +inf. `den > 0`.
const fn round_div(num: i64, den: i64) -> i64 {
    (2 * num + den).div_euclid(2 * den)
}
