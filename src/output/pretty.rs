use colored::{ColoredString, Colorize};

use crate::config::{DateFormat, Language, Preferences, SettingsTab};
use crate::overview::Overview;
use crate::stats::render_progress_bar;
use crate::tasks::{Priority, Task};

use super::DisplayOptions;

/// Format a list of tasks as a pretty table
pub fn format_tasks_pretty(tasks: &[&Task], title: &str, display: DisplayOptions) -> String {
    if tasks.is_empty() {
        return format!("{title} (0 tasks)\n  No tasks");
    }

    let mut output = format!("{} ({} tasks)\n", title, tasks.len());
    output.push_str(&"─".repeat(60));
    output.push('\n');

    for task in tasks {
        output.push_str(&task_line(task, display));
        output.push('\n');
    }

    output
}

/// Format a single task as pretty output
pub fn format_task_pretty(task: &Task, display: DisplayOptions) -> String {
    let mut output = format!("{} {}\n", status_icon(task), task.title.bold());
    output.push_str(&format!("  {}: {}\n", "ID".dimmed(), task.id));
    output.push_str(&format!(
        "  {}: {}\n",
        "Status".dimmed(),
        if task.completed { "completed" } else { "pending" }
    ));
    output.push_str(&format!(
        "  {}: {}\n",
        "Priority".dimmed(),
        priority_label(&task.priority, display.language)
    ));

    if !task.category.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Category".dimmed(), task.category));
    }

    if !task.description.is_empty() {
        output.push_str(&format!("  {}: {}\n", "Description".dimmed(), task.description));
    }

    if let Some(due) = task.due_date {
        output.push_str(&format!(
            "  {}: {}\n",
            "Due".dimmed(),
            display.date_format.format(due)
        ));
    }

    output.push_str(&format!(
        "  {}: {}\n",
        "Created".dimmed(),
        display.date_format.format(task.created_at)
    ));

    if let Some(done) = task.completed_at {
        output.push_str(&format!(
            "  {}: {}\n",
            "Completed".dimmed(),
            display.date_format.format(done)
        ));
    }

    output
}

/// Format the home overview
pub fn format_overview_pretty(overview: &Overview<'_>, display: DisplayOptions) -> String {
    let mut output = Vec::new();

    output.push("TASKFLOW".bold().to_string());
    output.push("─".repeat(50));
    output.push(format!(
        "  Total: {}  Completed: {}  Pending: {}",
        overview.total_tasks.to_string().cyan(),
        overview.completed_tasks.to_string().green(),
        overview.pending_tasks.to_string().yellow()
    ));
    output.push(format!(
        "  Completion: {}",
        render_progress_bar(overview.completion_rate, 30)
    ));
    output.push(String::new());

    output.push("RECENT TASKS".bold().to_string());
    output.push("─".repeat(50));
    if overview.recent_tasks.is_empty() {
        output.push("  No tasks yet".dimmed().to_string());
    }
    for task in &overview.recent_tasks {
        output.push(format!("  {}", task_line(task, display)));
    }

    output.join("\n")
}

/// Format one settings tab, or every tab when `tab` is `None`
pub fn format_preferences_pretty(preferences: &Preferences, tab: Option<SettingsTab>) -> String {
    let tabs: Vec<SettingsTab> = tab.map_or_else(|| SettingsTab::ALL.to_vec(), |t| vec![t]);

    let sections: Vec<String> = tabs
        .into_iter()
        .map(|tab| {
            let entries = preferences.entries(tab);
            let width = entries.iter().map(|(k, _)| k.len()).max().unwrap_or(0);

            let mut section = format!(
                "{}  {}\n",
                tab.title().to_uppercase().bold(),
                tab.description().dimmed()
            );
            section.push_str(&"─".repeat(50));
            for (field, value) in entries {
                section.push_str(&format!(
                    "\n  {:<width$}  {}",
                    format!("{}.{field}", tab.as_str()).cyan(),
                    value,
                    width = width + tab.as_str().len() + 1
                ));
            }
            section
        })
        .collect();

    sections.join("\n\n")
}

/// Localized label for a priority, colored by urgency
pub fn priority_label(priority: &Priority, language: Language) -> ColoredString {
    let label = language.priority_label(priority);
    match priority {
        Priority::High => label.red(),
        Priority::Medium => label.yellow(),
        Priority::Low => label.green(),
        Priority::Unrecognized(_) => label.dimmed(),
    }
}

fn status_icon(task: &Task) -> ColoredString {
    if task.completed {
        "[x]".green()
    } else {
        "[ ]".white()
    }
}

fn task_line(task: &Task, display: DisplayOptions) -> String {
    let title = if task.completed {
        task.title.dimmed().to_string()
    } else {
        task.title.bold().to_string()
    };

    let mut line = format!(
        "{} {} {}  {}",
        status_icon(task),
        format!("#{}", task.id).dimmed(),
        title,
        priority_label(&task.priority, display.language)
    );

    if !task.category.is_empty() {
        line.push_str(&format!("  {}", task.category.cyan()));
    }

    if let Some(due) = task.due_date {
        line.push_str(&format!("  {}", format_due(due, display.date_format).yellow()));
    }

    line
}

fn format_due(due: chrono::NaiveDate, date_format: DateFormat) -> String {
    format!("due {}", date_format.format(due))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::analytics_sample;
    use chrono::NaiveDate;

    fn make_task(title: &str, completed: bool) -> Task {
        Task {
            id: 42,
            title: title.to_string(),
            description: String::new(),
            priority: Priority::High,
            category: "Work".to_string(),
            completed,
            created_at: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            completed_at: completed.then(|| NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()),
            due_date: Some(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()),
        }
    }

    #[test]
    fn test_format_tasks_pretty_empty_list() {
        let output = format_tasks_pretty(&[], "Tasks", DisplayOptions::default());

        assert!(output.contains("Tasks (0 tasks)"));
        assert!(output.contains("No tasks"));
    }

    #[test]
    fn test_format_tasks_pretty_lines() {
        let open = make_task("Write report", false);
        let done = make_task("Send invoice", true);
        let output = format_tasks_pretty(&[&open, &done], "Tasks", DisplayOptions::default());

        assert!(output.contains("Tasks (2 tasks)"));
        assert!(output.contains("[ ]"));
        assert!(output.contains("[x]"));
        assert!(output.contains("Write report"));
        assert!(output.contains("Haute"));
        assert!(output.contains("Work"));
        assert!(output.contains("due 15/01/2024"));
    }

    #[test]
    fn test_format_tasks_pretty_honors_display_options() {
        let task = make_task("Write report", false);
        let display = DisplayOptions {
            date_format: DateFormat::Iso,
            language: Language::En,
        };
        let output = format_tasks_pretty(&[&task], "Tasks", display);

        assert!(output.contains("High"));
        assert!(output.contains("due 2024-01-15"));
    }

    #[test]
    fn test_format_task_pretty() {
        let mut task = make_task("Send invoice", true);
        task.description = "For January".to_string();
        let output = format_task_pretty(&task, DisplayOptions::default());

        assert!(output.contains("Send invoice"));
        assert!(output.contains("42"));
        assert!(output.contains("completed"));
        assert!(output.contains("For January"));
        assert!(output.contains("08/01/2024"));
        assert!(output.contains("11/01/2024"));
    }

    #[test]
    fn test_format_overview_pretty() {
        let tasks = analytics_sample();
        let overview = Overview::build(&tasks, 2);
        let output = format_overview_pretty(&overview, DisplayOptions::default());

        assert!(output.contains("70%"));
        assert!(output.contains("Finish the monthly report"));
        assert!(output.contains("Prepare the client presentation"));
        assert!(!output.contains("Review the application code"));
    }

    #[test]
    fn test_format_preferences_pretty_single_tab() {
        let output = format_preferences_pretty(&Preferences::default(), Some(SettingsTab::Display));

        assert!(output.contains("DISPLAY"));
        assert!(output.contains("display.theme"));
        assert!(output.contains("dd/mm/yyyy"));
        assert!(!output.contains("profile.name"));
    }

    #[test]
    fn test_format_preferences_pretty_all_tabs() {
        let output = format_preferences_pretty(&Preferences::default(), None);

        assert!(output.contains("profile.name"));
        assert!(output.contains("Jean Dupont"));
        assert!(output.contains("notifications.weekly_report"));
        assert!(output.contains("data.export_format"));
    }
}
