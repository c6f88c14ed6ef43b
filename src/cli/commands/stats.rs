//! Statistics command implementation.
//!
//! Handles the stats subcommands. The period only labels the report; every
//! section is computed over the whole loaded collection.

use colored::Colorize;
use serde_json::json;

use crate::cli::args::{OutputFormat, StatsArgs, StatsCommands};
use crate::config::Language;
use crate::error::TaskFlowError;
use crate::output::to_json;
use crate::stats::{
    compute_statistics, render_bar_chart, render_progress_bar, render_sparkline,
    render_summary_box, weekday_activity, StatsPeriod, TaskStatistics, WeekdayActivity,
};
use crate::tasks::SampleSet;

use super::Context;

/// Execute stats subcommands.
///
/// # Errors
///
/// Returns an error if the tasks cannot be loaded or output formatting fails.
pub fn stats(ctx: &Context, args: StatsArgs, format: OutputFormat) -> Result<String, TaskFlowError> {
    let tasks = ctx.load_tasks(SampleSet::Analytics)?;
    let statistics = compute_statistics(&tasks);
    let period = args.period.unwrap_or(ctx.config.stats.default_period);
    let language = ctx.config.preferences.display.language;

    match args.command {
        None => {
            let activity = weekday_activity(&tasks);
            render_dashboard(&statistics, &activity, period, language, format)
        }
        Some(StatsCommands::Summary) => render_summary(&statistics, period, format),
        Some(StatsCommands::Priorities) => {
            render_priorities(&statistics, period, language, format)
        }
        Some(StatsCommands::Categories) => render_categories(&statistics, period, format),
        Some(StatsCommands::Activity) => {
            render_activity(&weekday_activity(&tasks), period, format)
        }
    }
}

/// Render every section.
fn render_dashboard(
    statistics: &TaskStatistics,
    activity: &WeekdayActivity,
    period: StatsPeriod,
    language: Language,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "period": period,
            "statistics": statistics,
            "activity": activity_rows(activity),
        })),
        OutputFormat::Pretty => {
            let sections = [
                summary_lines(statistics),
                priority_lines(statistics, language),
                category_lines(statistics),
                activity_lines(activity),
            ];
            let mut output = vec![header(period)];
            for section in sections {
                output.push(String::new());
                output.extend(section);
            }
            Ok(output.join("\n"))
        }
    }
}

fn render_summary(
    statistics: &TaskStatistics,
    period: StatsPeriod,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "period": period,
            "total": statistics.total,
            "completed": statistics.completed,
            "pending": statistics.pending,
            "completionRate": statistics.completion_rate,
            "avgCompletionTime": statistics.avg_completion_time,
        })),
        OutputFormat::Pretty => {
            let mut output = vec![header(period), String::new()];
            output.extend(summary_lines(statistics));
            Ok(output.join("\n"))
        }
    }
}

fn render_priorities(
    statistics: &TaskStatistics,
    period: StatsPeriod,
    language: Language,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = statistics
                .priority_stats
                .iter()
                .map(|(priority, bucket)| {
                    json!({
                        "priority": priority,
                        "total": bucket.total,
                        "completed": bucket.completed,
                        "pending": bucket.pending(),
                        "rate": bucket.rate(),
                    })
                })
                .collect();
            to_json(&json!({
                "period": period,
                "priorities": rows,
                "unrecognizedPriority": statistics.unrecognized_priority,
            }))
        }
        OutputFormat::Pretty => {
            let mut output = vec![header(period), String::new()];
            output.extend(priority_lines(statistics, language));
            Ok(output.join("\n"))
        }
    }
}

fn render_categories(
    statistics: &TaskStatistics,
    period: StatsPeriod,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Json => {
            let rows: Vec<_> = statistics
                .category_stats
                .iter()
                .map(|(category, bucket)| {
                    json!({
                        "category": category,
                        "total": bucket.total,
                        "completed": bucket.completed,
                        "pending": bucket.pending(),
                        "rate": bucket.rate(),
                    })
                })
                .collect();
            to_json(&json!({ "period": period, "categories": rows }))
        }
        OutputFormat::Pretty => {
            let mut output = vec![header(period), String::new()];
            output.extend(category_lines(statistics));
            Ok(output.join("\n"))
        }
    }
}

fn render_activity(
    activity: &WeekdayActivity,
    period: StatsPeriod,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Json => to_json(&json!({
            "period": period,
            "activity": activity_rows(activity),
        })),
        OutputFormat::Pretty => {
            let mut output = vec![header(period), String::new()];
            output.extend(activity_lines(activity));
            Ok(output.join("\n"))
        }
    }
}

fn header(period: StatsPeriod) -> String {
    format!("{}  {}", "TASK STATISTICS".bold(), period.label().dimmed())
}

fn summary_lines(statistics: &TaskStatistics) -> Vec<String> {
    let items = [
        ("Total", statistics.total.to_string()),
        ("Completed", statistics.completed.to_string()),
        ("Pending", statistics.pending.to_string()),
        ("Completion rate", format!("{}%", statistics.completion_rate)),
        ("Avg completion", format!("{} days", statistics.avg_completion_time)),
    ];
    let mut lines = vec![render_summary_box("Summary", &items)];
    lines.push(format!(
        "  {}",
        render_progress_bar(statistics.completion_rate, 40)
    ));
    lines
}

fn priority_lines(statistics: &TaskStatistics, language: Language) -> Vec<String> {
    let mut lines = vec!["BY PRIORITY".bold().to_string(), "─".repeat(50)];
    for (priority, bucket) in statistics.priority_stats.iter() {
        lines.push(format!(
            "  {:<8} {}  {}/{}",
            language.priority_label(&priority),
            render_progress_bar(bucket.rate(), 20),
            bucket.completed,
            bucket.total
        ));
    }
    if statistics.unrecognized_priority > 0 {
        lines.push(
            format!(
                "  {} task(s) with an unrecognized priority",
                statistics.unrecognized_priority
            )
            .yellow()
            .to_string(),
        );
    }
    lines
}

fn category_lines(statistics: &TaskStatistics) -> Vec<String> {
    let mut lines = vec!["BY CATEGORY".bold().to_string(), "─".repeat(50)];
    if statistics.category_stats.is_empty() {
        lines.push("  No categories".dimmed().to_string());
        return lines;
    }

    let totals: Vec<(String, usize)> = statistics
        .category_stats
        .iter()
        .map(|(name, bucket)| (name.clone(), bucket.total))
        .collect();
    lines.push(render_bar_chart(&totals, 14, 20));
    lines.push(String::new());
    for (name, bucket) in &statistics.category_stats {
        lines.push(format!("  {name}: {}% completed", bucket.rate()));
    }
    lines
}

fn activity_lines(activity: &WeekdayActivity) -> Vec<String> {
    let mut lines = vec![
        "WEEKDAY ACTIVITY".bold().to_string(),
        "─".repeat(50),
        format!("  {:<5}{:>9}{:>11}", "Day", "Created", "Completed"),
    ];
    for (day, counts) in activity.labeled() {
        lines.push(format!("  {day:<5}{:>9}{:>11}", counts.created, counts.completed));
    }

    let created: Vec<usize> = activity.days.iter().map(|d| d.created).collect();
    let completed: Vec<usize> = activity.days.iter().map(|d| d.completed).collect();
    lines.push(String::new());
    lines.push(format!("  Created   {}", render_sparkline(&created).cyan()));
    lines.push(format!("  Completed {}", render_sparkline(&completed).green()));
    lines
}

fn activity_rows(activity: &WeekdayActivity) -> Vec<serde_json::Value> {
    activity
        .labeled()
        .map(|(day, counts)| {
            json!({
                "day": day,
                "created": counts.created,
                "completed": counts.completed,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::context;
    use pretty_assertions::assert_eq;
    use serde_json::Value;
    use tempfile::TempDir;

    fn run(command: Option<StatsCommands>, period: Option<StatsPeriod>, format: OutputFormat) -> String {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);
        stats(&ctx, StatsArgs { command, period }, format).unwrap()
    }

    #[test]
    fn test_summary_json() {
        let output = run(Some(StatsCommands::Summary), Some(StatsPeriod::Week), OutputFormat::Json);
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["period"], "week");
        assert_eq!(value["total"], 10);
        assert_eq!(value["completed"], 7);
        assert_eq!(value["pending"], 3);
        assert_eq!(value["completionRate"], 70);
        assert_eq!(value["avgCompletionTime"], 3);
    }

    #[test]
    fn test_period_defaults_to_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);
        ctx.config.stats.default_period = StatsPeriod::Year;

        let args = StatsArgs { command: Some(StatsCommands::Summary), period: None };
        let value: Value =
            serde_json::from_str(&stats(&ctx, args, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(value["period"], "year");
        // The period does not narrow the collection
        assert_eq!(value["total"], 10);
    }

    #[test]
    fn test_priorities_json() {
        let output = run(Some(StatsCommands::Priorities), None, OutputFormat::Json);
        let value: Value = serde_json::from_str(&output).unwrap();

        let rows = value["priorities"].as_array().unwrap();
        let summary: Vec<(String, u64, u64)> = rows
            .iter()
            .map(|r| {
                (
                    r["priority"].as_str().unwrap().to_string(),
                    r["total"].as_u64().unwrap(),
                    r["completed"].as_u64().unwrap(),
                )
            })
            .collect();
        assert_eq!(
            summary,
            vec![
                ("high".to_string(), 4, 3),
                ("medium".to_string(), 4, 2),
                ("low".to_string(), 2, 2),
            ]
        );
        assert_eq!(rows[0]["rate"], 75);
        assert_eq!(rows[1]["pending"], 2);
        assert_eq!(value["unrecognizedPriority"], 0);
    }

    #[test]
    fn test_categories_json_keeps_first_seen_order() {
        let output = run(Some(StatsCommands::Categories), None, OutputFormat::Json);
        let value: Value = serde_json::from_str(&output).unwrap();

        let names: Vec<&str> = value["categories"]
            .as_array()
            .unwrap()
            .iter()
            .map(|r| r["category"].as_str().unwrap())
            .collect();
        assert_eq!(
            names,
            vec!["Work", "Development", "Organization", "Personal", "Training", "Technical"]
        );
    }

    #[test]
    fn test_activity_json() {
        let output = run(Some(StatsCommands::Activity), None, OutputFormat::Json);
        let value: Value = serde_json::from_str(&output).unwrap();

        let rows = value["activity"].as_array().unwrap();
        assert_eq!(rows.len(), 7);
        assert_eq!(rows[0]["day"], "Mon");
        assert_eq!(rows[0]["created"], 1);
        assert_eq!(rows[4]["completed"], 2);
        assert_eq!(rows[6]["completed"], 0);
    }

    #[test]
    fn test_dashboard_pretty() {
        let output = run(None, Some(StatsPeriod::Month), OutputFormat::Pretty);

        assert!(output.contains("TASK STATISTICS"));
        assert!(output.contains("This month"));
        assert!(output.contains("Completion rate : 70%"));
        assert!(output.contains("Avg completion : 3 days"));
        assert!(output.contains("Haute"));
        assert!(output.contains("Development"));
        assert!(output.contains("WEEKDAY ACTIVITY"));
    }

    #[test]
    fn test_dashboard_json() {
        let output = run(None, None, OutputFormat::Json);
        let value: Value = serde_json::from_str(&output).unwrap();

        assert_eq!(value["period"], "month");
        assert_eq!(value["statistics"]["priorityStats"]["high"]["total"], 4);
        assert_eq!(value["statistics"]["categoryStats"]["Work"]["total"], 3);
        assert_eq!(value["activity"].as_array().unwrap().len(), 7);
    }
}
