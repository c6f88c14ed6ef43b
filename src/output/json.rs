//! JSON output formatting for taskflow.
//!
//! Task records keep their camelCase wire shape, so a `tasks` listing can be
//! fed back in through `--file`.

use serde::Serialize;
use serde_json::json;

use crate::config::{Preferences, SettingsTab};
use crate::error::TaskFlowError;
use crate::tasks::Task;

/// Format tasks as JSON
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if JSON serialization fails.
pub fn format_tasks_json(tasks: &[&Task], list_name: &str) -> Result<String, TaskFlowError> {
    let output = json!({
        "list": list_name,
        "count": tasks.len(),
        "tasks": tasks
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format preferences as JSON, narrowed to one tab when given
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if JSON serialization fails.
pub fn format_preferences_json(
    preferences: &Preferences,
    tab: Option<SettingsTab>,
) -> Result<String, TaskFlowError> {
    match tab {
        None => to_json(preferences),
        Some(SettingsTab::Profile) => to_json(&preferences.profile),
        Some(SettingsTab::Notifications) => to_json(&preferences.notifications),
        Some(SettingsTab::Display) => to_json(&preferences.display),
        Some(SettingsTab::Data) => to_json(&preferences.data),
    }
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, TaskFlowError> {
    Ok(serde_json::to_string_pretty(value)?)
}
