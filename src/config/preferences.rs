//! User preferences, grouped into the settings tabs.
//!
//! Every preference is addressed by a `tab.field` key such as
//! `display.theme` or `notifications.weekly_report`. [`Preferences::set`]
//! validates before assigning, so a rejected value leaves the preferences
//! untouched.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::TaskFlowError;
use crate::tasks::Priority;

/// A preference with a fixed set of allowed values.
pub trait Choice: Sized + Copy + 'static {
    /// Every allowed value, in display order.
    const ALL: &'static [Self];

    /// The stored spelling of this value.
    fn as_str(self) -> &'static str;

    /// Parse a user-supplied value for `key` (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::InvalidInput` listing the allowed values.
    fn parse(key: &str, value: &str) -> Result<Self, TaskFlowError> {
        let wanted = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| {
                let allowed: Vec<&str> = Self::ALL.iter().map(|c| c.as_str()).collect();
                TaskFlowError::InvalidInput(format!(
                    "invalid value '{wanted}' for {key} (expected one of: {})",
                    allowed.join(", ")
                ))
            })
    }
}

/// Settings tabs.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SettingsTab {
    /// Name, email and timezone.
    Profile,
    /// Reminder and report toggles.
    Notifications,
    /// Theme, language, date format and default view.
    Display,
    /// Backup and export options.
    Data,
}

impl SettingsTab {
    pub const ALL: [Self; 4] = [Self::Profile, Self::Notifications, Self::Display, Self::Data];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Profile => "profile",
            Self::Notifications => "notifications",
            Self::Display => "display",
            Self::Data => "data",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Profile => "Profile",
            Self::Notifications => "Notifications",
            Self::Display => "Display",
            Self::Data => "Data",
        }
    }

    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Profile => "Personal information and account preferences",
            Self::Notifications => "How and when you are reminded",
            Self::Display => "Appearance, language and formats",
            Self::Data => "Backups and exports",
        }
    }

    fn from_key(tab: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.as_str() == tab)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Timezone {
    #[default]
    #[serde(rename = "Europe/Paris")]
    EuropeParis,
    #[serde(rename = "Europe/London")]
    EuropeLondon,
    #[serde(rename = "America/New_York")]
    AmericaNewYork,
    #[serde(rename = "Asia/Tokyo")]
    AsiaTokyo,
}

impl Choice for Timezone {
    const ALL: &'static [Self] = &[
        Self::EuropeParis,
        Self::EuropeLondon,
        Self::AmericaNewYork,
        Self::AsiaTokyo,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Self::EuropeParis => "Europe/Paris",
            Self::EuropeLondon => "Europe/London",
            Self::AmericaNewYork => "America/New_York",
            Self::AsiaTokyo => "Asia/Tokyo",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
    Auto,
}

impl Choice for Theme {
    const ALL: &'static [Self] = &[Self::Light, Self::Dark, Self::Auto];

    fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

/// Interface language. Only priority labels are translated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Fr,
    En,
    Es,
}

impl Language {
    /// Display label for a priority. Unrecognized priorities get the
    /// language's neutral label.
    #[must_use]
    pub const fn priority_label(self, priority: &Priority) -> &'static str {
        match (self, priority) {
            (Self::Fr, Priority::High) => "Haute",
            (Self::Fr, Priority::Medium) => "Moyenne",
            (Self::Fr, Priority::Low) => "Basse",
            (Self::Fr, Priority::Unrecognized(_)) => "Normale",
            (Self::En, Priority::High) => "High",
            (Self::En, Priority::Medium) => "Medium",
            (Self::En, Priority::Low) => "Low",
            (Self::En | Self::Es, Priority::Unrecognized(_)) => "Normal",
            (Self::Es, Priority::High) => "Alta",
            (Self::Es, Priority::Medium) => "Media",
            (Self::Es, Priority::Low) => "Baja",
        }
    }
}

impl Choice for Language {
    const ALL: &'static [Self] = &[Self::Fr, Self::En, Self::Es];

    fn as_str(self) -> &'static str {
        match self {
            Self::Fr => "fr",
            Self::En => "en",
            Self::Es => "es",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateFormat {
    #[default]
    #[serde(rename = "dd/mm/yyyy")]
    DayMonthYear,
    #[serde(rename = "mm/dd/yyyy")]
    MonthDayYear,
    #[serde(rename = "yyyy-mm-dd")]
    Iso,
}

impl DateFormat {
    #[must_use]
    pub fn format(self, date: NaiveDate) -> String {
        let pattern = match self {
            Self::DayMonthYear => "%d/%m/%Y",
            Self::MonthDayYear => "%m/%d/%Y",
            Self::Iso => "%Y-%m-%d",
        };
        date.format(pattern).to_string()
    }
}

impl Choice for DateFormat {
    const ALL: &'static [Self] = &[Self::DayMonthYear, Self::MonthDayYear, Self::Iso];

    fn as_str(self) -> &'static str {
        match self {
            Self::DayMonthYear => "dd/mm/yyyy",
            Self::MonthDayYear => "mm/dd/yyyy",
            Self::Iso => "yyyy-mm-dd",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultView {
    #[default]
    List,
    Grid,
    Kanban,
}

impl Choice for DefaultView {
    const ALL: &'static [Self] = &[Self::List, Self::Grid, Self::Kanban];

    fn as_str(self) -> &'static str {
        match self {
            Self::List => "list",
            Self::Grid => "grid",
            Self::Kanban => "kanban",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackupFrequency {
    #[default]
    Daily,
    Weekly,
    Monthly,
}

impl Choice for BackupFrequency {
    const ALL: &'static [Self] = &[Self::Daily, Self::Weekly, Self::Monthly];

    fn as_str(self) -> &'static str {
        match self {
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Json,
    Csv,
    Xlsx,
}

impl Choice for ExportFormat {
    const ALL: &'static [Self] = &[Self::Json, Self::Csv, Self::Xlsx];

    fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Xlsx => "xlsx",
        }
    }
}

/// Profile tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfilePreferences {
    pub name: String,
    pub email: String,
    pub timezone: Timezone,
}

/// Notifications tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationPreferences {
    pub email_reminders: bool,
    pub push_notifications: bool,
    pub weekly_report: bool,
    pub task_deadlines: bool,
}

/// Display tab.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayPreferences {
    pub theme: Theme,
    pub language: Language,
    pub date_format: DateFormat,
    pub default_view: DefaultView,
}

/// Data tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DataPreferences {
    pub auto_backup: bool,
    pub backup_frequency: BackupFrequency,
    pub export_format: ExportFormat,
}

/// All preferences, one section per settings tab.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub profile: ProfilePreferences,
    pub notifications: NotificationPreferences,
    pub display: DisplayPreferences,
    pub data: DataPreferences,
}

impl Default for ProfilePreferences {
    fn default() -> Self {
        Self {
            name: "Jean Dupont".to_string(),
            email: "jean.dupont@email.com".to_string(),
            timezone: Timezone::default(),
        }
    }
}

impl Default for NotificationPreferences {
    fn default() -> Self {
        Self {
            email_reminders: true,
            push_notifications: true,
            weekly_report: false,
            task_deadlines: true,
        }
    }
}

impl Default for DataPreferences {
    fn default() -> Self {
        Self {
            auto_backup: true,
            backup_frequency: BackupFrequency::default(),
            export_format: ExportFormat::default(),
        }
    }
}

impl Preferences {
    /// `(field, value)` pairs shown on a tab, in display order.
    #[must_use]
    pub fn entries(&self, tab: SettingsTab) -> Vec<(&'static str, String)> {
        match tab {
            SettingsTab::Profile => vec![
                ("name", self.profile.name.clone()),
                ("email", self.profile.email.clone()),
                ("timezone", self.profile.timezone.as_str().to_string()),
            ],
            SettingsTab::Notifications => vec![
                ("email_reminders", self.notifications.email_reminders.to_string()),
                ("push_notifications", self.notifications.push_notifications.to_string()),
                ("weekly_report", self.notifications.weekly_report.to_string()),
                ("task_deadlines", self.notifications.task_deadlines.to_string()),
            ],
            SettingsTab::Display => vec![
                ("theme", self.display.theme.as_str().to_string()),
                ("language", self.display.language.as_str().to_string()),
                ("date_format", self.display.date_format.as_str().to_string()),
                ("default_view", self.display.default_view.as_str().to_string()),
            ],
            SettingsTab::Data => vec![
                ("auto_backup", self.data.auto_backup.to_string()),
                ("backup_frequency", self.data.backup_frequency.as_str().to_string()),
                ("export_format", self.data.export_format.as_str().to_string()),
            ],
        }
    }

    /// Read one preference as text.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::InvalidInput` for an unknown key.
    pub fn get(&self, key: &str) -> Result<String, TaskFlowError> {
        let (tab, field) = split_key(key)?;
        self.entries(tab)
            .into_iter()
            .find(|(name, _)| *name == field)
            .map(|(_, value)| value)
            .ok_or_else(|| unknown_key(key))
    }

    /// Validate and assign one preference.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::InvalidInput` for an unknown key or a value
    /// the field does not accept.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), TaskFlowError> {
        let (tab, field) = split_key(key)?;
        match (tab, field) {
            (SettingsTab::Profile, "name") => self.profile.name = parse_name(key, value)?,
            (SettingsTab::Profile, "email") => self.profile.email = parse_email(key, value)?,
            (SettingsTab::Profile, "timezone") => self.profile.timezone = Choice::parse(key, value)?,
            (SettingsTab::Notifications, "email_reminders") => {
                self.notifications.email_reminders = parse_bool(key, value)?;
            }
            (SettingsTab::Notifications, "push_notifications") => {
                self.notifications.push_notifications = parse_bool(key, value)?;
            }
            (SettingsTab::Notifications, "weekly_report") => {
                self.notifications.weekly_report = parse_bool(key, value)?;
            }
            (SettingsTab::Notifications, "task_deadlines") => {
                self.notifications.task_deadlines = parse_bool(key, value)?;
            }
            (SettingsTab::Display, "theme") => self.display.theme = Choice::parse(key, value)?,
            (SettingsTab::Display, "language") => self.display.language = Choice::parse(key, value)?,
            (SettingsTab::Display, "date_format") => {
                self.display.date_format = Choice::parse(key, value)?;
            }
            (SettingsTab::Display, "default_view") => {
                self.display.default_view = Choice::parse(key, value)?;
            }
            (SettingsTab::Data, "auto_backup") => self.data.auto_backup = parse_bool(key, value)?,
            (SettingsTab::Data, "backup_frequency") => {
                self.data.backup_frequency = Choice::parse(key, value)?;
            }
            (SettingsTab::Data, "export_format") => {
                self.data.export_format = Choice::parse(key, value)?;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}

fn split_key(key: &str) -> Result<(SettingsTab, &str), TaskFlowError> {
    let (tab, field) = key.split_once('.').ok_or_else(|| unknown_key(key))?;
    let tab = SettingsTab::from_key(tab).ok_or_else(|| unknown_key(key))?;
    Ok((tab, field))
}

fn unknown_key(key: &str) -> TaskFlowError {
    TaskFlowError::InvalidInput(format!(
        "unknown setting '{key}' (keys look like tab.field, e.g. display.theme)"
    ))
}

fn parse_bool(key: &str, value: &str) -> Result<bool, TaskFlowError> {
    match value.trim().to_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(TaskFlowError::InvalidInput(format!(
            "invalid value '{other}' for {key} (expected true or false)"
        ))),
    }
}

fn parse_name(key: &str, value: &str) -> Result<String, TaskFlowError> {
    let name = value.trim();
    if name.is_empty() {
        return Err(TaskFlowError::InvalidInput(format!("{key} must not be empty")));
    }
    Ok(name.to_string())
}

fn parse_email(key: &str, value: &str) -> Result<String, TaskFlowError> {
    let email = value.trim();
    let valid = email
        .split_once('@')
        .is_some_and(|(user, domain)| !user.is_empty() && domain.contains('.') && !domain.starts_with('.'));
    if !valid {
        return Err(TaskFlowError::InvalidInput(format!(
            "invalid value '{email}' for {key} (expected an email address)"
        )));
    }
    Ok(email.to_string())
}
