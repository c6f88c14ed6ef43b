//! Configuration management for taskflow.
//!
//! This module handles loading and saving configuration from `~/.taskflow/`,
//! including the user preferences edited through `taskflow settings`.

mod export;
mod paths;
mod preferences;
mod settings;

pub use export::SettingsExport;
pub use paths::Paths;
pub use preferences::{
    BackupFrequency, Choice, DataPreferences, DateFormat, DefaultView, DisplayPreferences,
    ExportFormat, Language, NotificationPreferences, Preferences, ProfilePreferences, SettingsTab,
    Theme, Timezone,
};
pub use settings::{ColorSetting, Config, GeneralConfig, StatsConfig};
