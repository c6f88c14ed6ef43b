//! Command implementations for taskflow.
//!
//! Every command returns the text to print; `main` owns stdout.

mod completions;
mod home;
mod settings;
mod stats;
mod tasks;

pub use completions::{completions, generate_completions};
pub use home::home;
pub use settings::settings;
pub use stats::stats;
pub use tasks::tasks;

use std::path::PathBuf;

use chrono::NaiveDate;

use crate::config::{Config, Paths};
use crate::error::TaskFlowError;
use crate::output::DisplayOptions;
use crate::tasks::{load_tasks, SampleSet, Task};

/// State shared by the command handlers for one invocation.
#[derive(Debug, Clone)]
pub struct Context {
    pub config: Config,
    pub paths: Paths,
    /// Task collection to read; demo data when `None`.
    pub task_file: Option<PathBuf>,
    /// Date stamped on new and completed tasks.
    pub today: NaiveDate,
}

impl Context {
    #[must_use]
    pub const fn new(
        config: Config,
        paths: Paths,
        task_file: Option<PathBuf>,
        today: NaiveDate,
    ) -> Self {
        Self {
            config,
            paths,
            task_file,
            today,
        }
    }

    /// Read the task collection for this invocation, or `fallback` when no
    /// task file is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the task file cannot be read or parsed.
    pub fn load_tasks(&self, fallback: SampleSet) -> Result<Vec<Task>, TaskFlowError> {
        load_tasks(self.task_file.as_deref(), fallback)
    }

    /// Pretty-output options from the display preferences.
    #[must_use]
    pub fn display(&self) -> DisplayOptions {
        DisplayOptions::from(&self.config.preferences.display)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use tempfile::TempDir;

    /// A context rooted in a temp dir, reading the demo data.
    pub fn context(temp_dir: &TempDir) -> Context {
        Context::new(
            Config::default(),
            Paths::with_root(temp_dir.path().join(".taskflow")),
            None,
            NaiveDate::from_ymd_opt(2024, 1, 20).unwrap(),
        )
    }
}
