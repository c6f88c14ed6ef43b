//! Settings and task backup document.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::Preferences;
use crate::tasks::Task;

/// Backup of the current preferences and task collection.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsExport<'a> {
    pub export_date: DateTime<Utc>,
    pub settings: &'a Preferences,
    pub tasks: &'a [Task],
}

impl<'a> SettingsExport<'a> {
    #[must_use]
    pub const fn new(settings: &'a Preferences, tasks: &'a [Task], now: DateTime<Utc>) -> Self {
        Self {
            export_date: now,
            settings,
            tasks,
        }
    }

    /// Suggested file name, e.g. `taskflow-backup-2024-01-15.json`.
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("taskflow-backup-{}.json", self.export_date.format("%Y-%m-%d"))
    }
}
