//! Built-in demo data.
//!
//! Used whenever no task file is configured, so every command has something
//! to show out of the box. The statistics screens get a dated history; the
//! task board and home screen get the board's starting list.

use chrono::{Days, NaiveDate};

use crate::tasks::{Priority, Task};

/// Which built-in collection stands in for a missing task file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SampleSet {
    /// Ten tasks with completion dates, behind the statistics screens.
    Analytics,
    /// Eight tasks with due dates, the board's starting list.
    TaskList,
}

impl SampleSet {
    #[must_use]
    pub fn tasks(self) -> Vec<Task> {
        match self {
            Self::Analytics => analytics_sample(),
            Self::TaskList => task_list_sample(),
        }
    }
}

/// Ten demo tasks spread over the first two weeks of January 2024.
#[must_use]
pub fn analytics_sample() -> Vec<Task> {
    vec![
        task(1, "Finish the monthly report", "Compile the sales figures and write the report for management", Priority::High, "Work", jan(10), None, Some(jan(15))),
        task(2, "Prepare the client presentation", "Build the slides for the meeting with ABC Corp", Priority::High, "Work", jan(8), Some(jan(11)), Some(jan(12))),
        task(3, "Review the application code", "Code review of the new payment feature", Priority::Medium, "Development", jan(5), Some(jan(9)), Some(jan(10))),
        task(4, "Plan the week's meetings", "Book slots for all the important meetings", Priority::Low, "Organization", jan(3), Some(jan(6)), Some(jan(8))),
        task(5, "Do the shopping", "Buy the ingredients for Saturday's dinner", Priority::Medium, "Personal", jan(11), None, Some(jan(13))),
        task(6, "Update the portfolio", "Add the new projects and refresh the design", Priority::Low, "Personal", jan(9), Some(jan(12)), Some(jan(20))),
        task(7, "Advanced React training", "Follow the online course on advanced hooks", Priority::Medium, "Training", jan(7), None, Some(jan(18))),
        task(8, "Optimize site performance", "Profile and improve page load times", Priority::High, "Development", jan(6), Some(jan(10)), Some(jan(16))),
        task(9, "Marketing team meeting", "Quarterly campaign kickoff", Priority::Medium, "Work", jan(4), Some(jan(8)), None),
        task(10, "Back up the data", "Full backup of the production database", Priority::High, "Technical", jan(2), Some(jan(5)), None),
    ]
}

/// Eight demo tasks as the board first shows them. Completed entries carry
/// no completion date.
#[must_use]
pub fn task_list_sample() -> Vec<Task> {
    let listed = [
        (1, "Finish the monthly report", "Compile the sales figures and write the report for management", Priority::High, "Work", false, 15, 10),
        (2, "Prepare the client presentation", "Build the slides for the meeting with ABC Corp", Priority::High, "Work", false, 12, 8),
        (3, "Review the application code", "Code review of the new payment feature", Priority::Medium, "Development", true, 10, 5),
        (4, "Plan the week's meetings", "Book slots for all the important meetings", Priority::Low, "Organization", true, 8, 3),
        (5, "Do the shopping", "Buy the ingredients for Saturday's dinner", Priority::Medium, "Personal", false, 13, 11),
        (6, "Update the portfolio", "Add the new projects and refresh the design", Priority::Low, "Personal", false, 20, 9),
        (7, "Advanced React training", "Follow the online course on advanced hooks", Priority::Medium, "Training", false, 18, 7),
        (8, "Optimize site performance", "Profile and improve page load times", Priority::High, "Development", false, 16, 6),
    ];

    listed
        .into_iter()
        .map(|(id, title, description, priority, category, completed, due, created)| Task {
            completed,
            ..task(id, title, description, priority, category, jan(created), None, Some(jan(due)))
        })
        .collect()
}

#[allow(clippy::too_many_arguments)]
fn task(
    id: u64,
    title: &str,
    description: &str,
    priority: Priority,
    category: &str,
    created_at: NaiveDate,
    completed_at: Option<NaiveDate>,
    due_date: Option<NaiveDate>,
) -> Task {
    Task {
        id,
        title: title.to_string(),
        description: description.to_string(),
        priority,
        category: category.to_string(),
        completed: completed_at.is_some(),
        created_at,
        completed_at,
        due_date,
    }
}

const NEW_YEARS_EVE_2023: NaiveDate = match NaiveDate::from_ymd_opt(2023, 12, 31) {
    Some(date) => date,
    None => panic!("invalid calendar date"),
};

/// January `day`, 2024.
fn jan(day: u64) -> NaiveDate {
    NEW_YEARS_EVE_2023 + Days::new(day)
}
