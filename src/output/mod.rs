//! Output formatting for taskflow.
//!
//! This module provides formatters for displaying tasks, the home overview
//! and preferences in various formats.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::config::{DateFormat, DisplayPreferences, Language, Preferences, SettingsTab};
use crate::error::TaskFlowError;
use crate::overview::Overview;
use crate::tasks::Task;

pub use json::*;
pub use pretty::*;

/// Display preferences that shape pretty output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    pub date_format: DateFormat,
    pub language: Language,
}

impl From<&DisplayPreferences> for DisplayOptions {
    fn from(display: &DisplayPreferences) -> Self {
        Self {
            date_format: display.date_format,
            language: display.language,
        }
    }
}

/// Format tasks based on output format
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if JSON serialization fails.
pub fn format_tasks(
    tasks: &[&Task],
    title: &str,
    format: OutputFormat,
    display: DisplayOptions,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_tasks_pretty(tasks, title, display)),
        OutputFormat::Json => format_tasks_json(tasks, title),
    }
}

/// Format a single task based on output format
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if JSON serialization fails.
pub fn format_task(
    task: &Task,
    format: OutputFormat,
    display: DisplayOptions,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_task_pretty(task, display)),
        OutputFormat::Json => to_json(task),
    }
}

/// Format the home overview based on output format
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if JSON serialization fails.
pub fn format_overview(
    overview: &Overview<'_>,
    format: OutputFormat,
    display: DisplayOptions,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_overview_pretty(overview, display)),
        OutputFormat::Json => to_json(overview),
    }
}

/// Format preferences based on output format
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if JSON serialization fails.
pub fn format_preferences(
    preferences: &Preferences,
    tab: Option<SettingsTab>,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Pretty => Ok(format_preferences_pretty(preferences, tab)),
        OutputFormat::Json => format_preferences_json(preferences, tab),
    }
}
