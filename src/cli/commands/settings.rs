//! Settings command implementation.

use std::path::{Path, PathBuf};

use chrono::Utc;
use colored::Colorize;
use serde_json::json;
use tracing::{info, warn};

use crate::cli::args::{OutputFormat, SettingsCommands};
use crate::config::{ExportFormat, SettingsExport, SettingsTab};
use crate::error::TaskFlowError;
use crate::output::{format_preferences, to_json};
use crate::tasks::SampleSet;

use super::Context;

/// Execute settings subcommands.
///
/// `set` saves the whole config file after the value is accepted.
///
/// # Errors
///
/// Returns an error if a key or value is rejected, the config or export file
/// cannot be written, or output formatting fails.
pub fn settings(
    ctx: &mut Context,
    cmd: Option<SettingsCommands>,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match cmd.unwrap_or(SettingsCommands::Show { tab: None }) {
        SettingsCommands::Show { tab } => format_preferences(&ctx.config.preferences, tab, format),
        SettingsCommands::Get { key } => {
            let value = ctx.config.preferences.get(&key)?;
            match format {
                OutputFormat::Json => to_json(&json!({ "key": key, "value": value })),
                OutputFormat::Pretty => Ok(value),
            }
        }
        SettingsCommands::Set { key, value } => {
            ctx.config.preferences.set(&key, &value)?;
            ctx.config.save(&ctx.paths)?;
            info!(%key, "preference saved");

            let stored = ctx.config.preferences.get(&key)?;
            match format {
                OutputFormat::Json => to_json(&json!({ "key": key, "value": stored })),
                OutputFormat::Pretty => Ok(format!("{} {key} = {stored}", "Saved".green())),
            }
        }
        SettingsCommands::Tabs => match format {
            OutputFormat::Json => {
                let tabs: Vec<_> = SettingsTab::ALL
                    .iter()
                    .map(|tab| {
                        json!({
                            "tab": tab,
                            "title": tab.title(),
                            "description": tab.description(),
                        })
                    })
                    .collect();
                to_json(&tabs)
            }
            OutputFormat::Pretty => Ok(SettingsTab::ALL
                .iter()
                .map(|tab| format!("{:<15}{}", tab.as_str().cyan(), tab.description().dimmed()))
                .collect::<Vec<_>>()
                .join("\n")),
        },
        SettingsCommands::Export { out } => export(ctx, out.as_deref()),
    }
}

/// Write or print the JSON backup.
fn export(ctx: &Context, out: Option<&Path>) -> Result<String, TaskFlowError> {
    let preferences = &ctx.config.preferences;
    if preferences.data.export_format != ExportFormat::Json {
        warn!(
            format = ?preferences.data.export_format,
            "only JSON backups are produced; writing JSON"
        );
    }

    let tasks = ctx.load_tasks(SampleSet::TaskList)?;
    let backup = SettingsExport::new(preferences, &tasks, Utc::now());
    let contents = to_json(&backup)?;

    let Some(out) = out else {
        return Ok(contents);
    };

    let target: PathBuf = if out.is_dir() {
        out.join(backup.file_name())
    } else {
        out.to_path_buf()
    };
    std::fs::write(&target, contents)?;
    info!(path = %target.display(), "backup written");
    Ok(format!("Exported settings and {} tasks to {}", tasks.len(), target.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::commands::test_support::context;
    use crate::config::{Config, Theme};
    use serde_json::Value;
    use tempfile::TempDir;

    #[test]
    fn test_show_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);

        let output = settings(&mut ctx, None, OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["display"]["language"], "fr");
        assert_eq!(value["data"]["backup_frequency"], "daily");
    }

    #[test]
    fn test_get() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);

        let cmd = SettingsCommands::Get { key: "profile.email".to_string() };
        let output = settings(&mut ctx, Some(cmd), OutputFormat::Pretty).unwrap();
        assert_eq!(output, "jean.dupont@email.com");
    }

    #[test]
    fn test_set_saves_config() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);

        let cmd = SettingsCommands::Set {
            key: "display.theme".to_string(),
            value: "DARK".to_string(),
        };
        let output = settings(&mut ctx, Some(cmd), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["value"], "dark");

        let saved = Config::load_from_path(&ctx.paths.config_file).unwrap();
        assert_eq!(saved.preferences.display.theme, Theme::Dark);
    }

    #[test]
    fn test_set_invalid_does_not_write() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);

        let cmd = SettingsCommands::Set {
            key: "display.theme".to_string(),
            value: "neon".to_string(),
        };
        assert!(settings(&mut ctx, Some(cmd), OutputFormat::Pretty).is_err());
        assert!(!ctx.paths.config_file.exists());
        assert_eq!(ctx.config.preferences.display.theme, Theme::Light);
    }

    #[test]
    fn test_tabs_json() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);

        let output = settings(&mut ctx, Some(SettingsCommands::Tabs), OutputFormat::Json).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        let tabs: Vec<&str> = value
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["tab"].as_str().unwrap())
            .collect();
        assert_eq!(tabs, vec!["profile", "notifications", "display", "data"]);
    }

    #[test]
    fn test_export_to_stdout() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);

        let output =
            settings(&mut ctx, Some(SettingsCommands::Export { out: None }), OutputFormat::Pretty)
                .unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        assert!(value["exportDate"].is_string());
        assert_eq!(value["settings"]["profile"]["name"], "Jean Dupont");
        assert_eq!(value["tasks"].as_array().unwrap().len(), 8);
    }

    #[test]
    fn test_export_into_directory() {
        let temp_dir = TempDir::new().unwrap();
        let mut ctx = context(&temp_dir);

        let cmd = SettingsCommands::Export { out: Some(temp_dir.path().to_path_buf()) };
        let output = settings(&mut ctx, Some(cmd), OutputFormat::Pretty).unwrap();
        assert!(output.contains("Exported settings and 8 tasks"));

        let backups: Vec<_> = std::fs::read_dir(temp_dir.path())
            .unwrap()
            .filter_map(Result::ok)
            .map(|e| e.file_name().to_string_lossy().to_string())
            .filter(|name| name.starts_with("taskflow-backup-") && name.ends_with(".json"))
            .collect();
        assert_eq!(backups.len(), 1);
    }
}
