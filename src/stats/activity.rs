//! Created/completed counts by day of week.

use chrono::Datelike;
use serde::{Deserialize, Serialize};

use crate::tasks::Task;

/// Short labels, Monday first.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Activity for one weekday.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayActivity {
    pub created: usize,
    pub completed: usize,
}

/// Per-weekday activity, Monday (index 0) through Sunday (index 6).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekdayActivity {
    pub days: [DayActivity; 7],
}

impl WeekdayActivity {
    /// `(label, activity)` pairs, Monday first.
    pub fn labeled(&self) -> impl Iterator<Item = (&'static str, DayActivity)> + '_ {
        WEEKDAY_LABELS.iter().copied().zip(self.days.iter().copied())
    }
}

/// Count task creations and completions per weekday.
///
/// Only completed tasks with a completion date contribute to `completed`.
#[must_use]
pub fn weekday_activity(tasks: &[Task]) -> WeekdayActivity {
    let mut activity = WeekdayActivity::default();

    for task in tasks {
        let created = task.created_at.weekday().num_days_from_monday() as usize;
        activity.days[created].created += 1;

        if let (true, Some(done)) = (task.completed, task.completed_at) {
            let completed = done.weekday().num_days_from_monday() as usize;
            activity.days[completed].completed += 1;
        }
    }

    activity
}
