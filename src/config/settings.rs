//! Configuration settings for taskflow.
//!
//! Settings are loaded from `~/.taskflow/config.yaml`.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cli::args::OutputFormat;
use crate::config::{Paths, Preferences};
use crate::error::TaskFlowError;
use crate::overview::DEFAULT_RECENT_LIMIT;
use crate::stats::StatsPeriod;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Statistics settings.
    pub stats: StatsConfig,
    /// User preferences, one section per settings tab.
    pub preferences: Preferences,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GeneralConfig {
    /// Output format used when `--output` is not given.
    pub default_output: OutputFormat,
    /// Color output setting.
    pub color: ColorSetting,
    /// Task collection read when `--file` is not given.
    pub tasks_file: Option<PathBuf>,
    /// Number of tasks in the home screen's recent list.
    pub recent_limit: usize,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Statistics settings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StatsConfig {
    /// Period shown when `--period` is not given.
    pub default_period: StatsPeriod,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: OutputFormat::Pretty,
            color: ColorSetting::Auto,
            tasks_file: None,
            recent_limit: DEFAULT_RECENT_LIMIT,
        }
    }
}

impl Config {
    /// Read the config file under `paths`, falling back to defaults when it
    /// does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::Config` if the file exists but cannot be read
    /// or is not valid config YAML.
    pub fn load(paths: &Paths) -> Result<Self, TaskFlowError> {
        Self::load_from_path(&paths.config_file)
    }

    /// Like [`Config::load`], for an explicit file.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::Config` if the file exists but cannot be read
    /// or is not valid config YAML.
    pub fn load_from_path(path: &Path) -> Result<Self, TaskFlowError> {
        let contents = match std::fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => return Err(config_error("read", path, &e)),
        };

        serde_yaml::from_str(&contents).map_err(|e| config_error("parse", path, &e))
    }

    /// Write the config file under `paths`, creating `~/.taskflow` if needed.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::Config` if the directory or file cannot be
    /// written.
    pub fn save(&self, paths: &Paths) -> Result<(), TaskFlowError> {
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Like [`Config::save`], for an explicit file whose directory exists.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::Config` if the file cannot be written.
    pub fn save_to_path(&self, path: &Path) -> Result<(), TaskFlowError> {
        let yaml = serde_yaml::to_string(self)
            .map_err(|e| TaskFlowError::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, yaml).map_err(|e| config_error("write", path, &e))?;
        debug!(path = %path.display(), "config saved");
        Ok(())
    }
}

fn config_error(action: &str, path: &Path, e: &dyn std::fmt::Display) -> TaskFlowError {
    TaskFlowError::Config(format!("Failed to {action} config file {}: {e}", path.display()))
}
