use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::config::SettingsTab;
use crate::stats::StatsPeriod;
use crate::tasks::{Priority, PriorityFilter, StatusFilter};

#[derive(Parser)]
#[command(name = "taskflow")]
#[command(about = "Task statistics and a small task board in your terminal")]
#[command(long_about = "taskflow - task statistics from the command line

Reads a task collection (a JSON file or the built-in demo data) and shows
an overview, a filterable task list, and completion statistics by priority,
category and weekday.

QUICK START:
  taskflow home                        Headline counters and recent tasks
  taskflow tasks list --status pending Pending tasks
  taskflow stats                       Statistics dashboard
  taskflow settings show --tab display Display preferences

TASK FILES:
  --file tasks.json    Read tasks from a file (array or {\"tasks\": [...]})
  Without --file, general.tasks_file from ~/.taskflow/config.yaml is used,
  then the built-in demo data. Task files are never modified; edits print
  the resulting collection.

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskflow <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output, or 'json' for
    /// machine-readable output. Defaults to general.default_output.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Task collection to read (JSON)
    #[arg(short, long, global = true, value_name = "PATH", env = "TASKFLOW_FILE")]
    pub file: Option<PathBuf>,

    /// Enable debug logging on stderr (TASKFLOW_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show the home overview
    ///
    /// Total, completed and pending counts, the completion rate, and the
    /// most recent tasks (general.recent_limit, 4 by default).
    ///
    /// # Examples
    ///
    ///   taskflow home
    ///   taskflow h -o json
    #[command(alias = "h")]
    Home,

    /// List, inspect and edit tasks
    ///
    /// Edits work on the loaded collection and print the result; redirect
    /// JSON output to a file to keep it.
    ///
    /// # Examples
    ///
    ///   taskflow tasks list --search report --priority high
    ///   taskflow tasks add "Call the bank" -p high -c Personal --due 2024-02-01
    ///   taskflow tasks toggle 5 -o json > tasks.json
    #[command(alias = "t")]
    Tasks(TasksArgs),

    /// Show task statistics
    ///
    /// Completion rate, priority and category breakdowns, average
    /// completion time in days, and weekday activity.
    ///
    /// # Examples
    ///
    ///   taskflow stats
    ///   taskflow stats categories
    ///   taskflow stats summary --period week -o json
    #[command(alias = "s")]
    Stats(StatsArgs),

    /// View and change preferences
    ///
    /// Preferences are grouped into tabs (profile, notifications, display,
    /// data) and addressed as tab.field.
    ///
    /// # Examples
    ///
    ///   taskflow settings show --tab display
    ///   taskflow settings set display.date_format yyyy-mm-dd
    ///   taskflow settings export --out ~/backups
    Settings(SettingsArgs),

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   taskflow completions bash > ~/.bash_completion.d/taskflow
    ///   taskflow completions zsh --install
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,

        /// Show installation instructions
        #[arg(long, short = 'i')]
        install: bool,
    },
}

/// Arguments for task commands.
#[derive(Args)]
pub struct TasksArgs {
    #[command(subcommand)]
    pub command: Option<TaskCommands>,
}

/// Task subcommands.
#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks, optionally filtered
    #[command(alias = "ls")]
    List {
        /// Case-insensitive text to find in title or description
        #[arg(short, long)]
        search: Option<String>,

        /// Priority to keep (all, low, medium, high)
        #[arg(short, long, default_value = "all")]
        priority: PriorityFilter,

        /// Completion state to keep
        #[arg(long, value_enum, default_value = "all")]
        status: StatusFilter,
    },

    /// Show one task
    Show {
        /// Task id
        id: u64,
    },

    /// Add a task
    Add {
        /// Task title
        title: String,

        /// Longer description
        #[arg(short, long)]
        description: Option<String>,

        /// Priority (low, medium, high; default medium)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// Category (default General)
        #[arg(short, long)]
        category: Option<String>,

        /// Due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// Change fields of a task
    Edit {
        /// Task id
        id: u64,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(short, long)]
        description: Option<String>,

        /// New priority (low, medium, high)
        #[arg(short, long, value_parser = parse_priority)]
        priority: Option<Priority>,

        /// New category
        #[arg(short, long)]
        category: Option<String>,

        /// New due date (YYYY-MM-DD)
        #[arg(long)]
        due: Option<NaiveDate>,
    },

    /// Delete a task
    #[command(alias = "rm")]
    Delete {
        /// Task id
        id: u64,
    },

    /// Flip a task between completed and pending
    Toggle {
        /// Task id
        id: u64,
    },
}

/// Priority flags go through the strict parser; the lenient `From<String>`
/// conversion is only for task files.
fn parse_priority(s: &str) -> Result<Priority, String> {
    s.parse::<Priority>().map_err(|e| e.to_string())
}

/// Arguments for stats commands.
#[derive(Args)]
pub struct StatsArgs {
    #[command(subcommand)]
    pub command: Option<StatsCommands>,

    /// Period shown in the header (defaults to stats.default_period)
    #[arg(long, value_enum, global = true)]
    pub period: Option<StatsPeriod>,
}

/// Stats subcommands.
#[derive(Subcommand, Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatsCommands {
    /// Headline counters and average completion time
    Summary,
    /// Totals and completion rate per priority
    Priorities,
    /// Totals and completion rate per category
    Categories,
    /// Created and completed tasks per weekday
    Activity,
}

/// Arguments for settings commands.
#[derive(Args)]
pub struct SettingsArgs {
    #[command(subcommand)]
    pub command: Option<SettingsCommands>,
}

/// Settings subcommands.
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show preferences
    Show {
        /// Only this tab
        #[arg(short, long, value_enum)]
        tab: Option<SettingsTab>,
    },

    /// Print one preference
    Get {
        /// Preference key, e.g. display.theme
        key: String,
    },

    /// Change one preference and save it
    Set {
        /// Preference key, e.g. display.theme
        key: String,

        /// New value
        value: String,
    },

    /// List the settings tabs
    Tabs,

    /// Export preferences and tasks as a JSON backup
    Export {
        /// File or directory to write to (prints to stdout when omitted)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_home_command() {
        let cli = Cli::try_parse_from(["taskflow", "home"]).unwrap();
        assert!(matches!(cli.command, Commands::Home));
        assert_eq!(cli.output, None);
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_home_alias() {
        let cli = Cli::try_parse_from(["taskflow", "h"]).unwrap();
        assert!(matches!(cli.command, Commands::Home));
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["taskflow", "home", "-o", "json", "--file", "t.json", "-v"])
                .unwrap();
        assert_eq!(cli.output, Some(OutputFormat::Json));
        assert_eq!(cli.file, Some(PathBuf::from("t.json")));
        assert!(cli.verbose);
    }

    #[test]
    fn test_cli_tasks_list_defaults() {
        let cli = Cli::try_parse_from(["taskflow", "tasks", "list"]).unwrap();
        match cli.command {
            Commands::Tasks(TasksArgs {
                command: Some(TaskCommands::List { search, priority, status }),
            }) => {
                assert_eq!(search, None);
                assert_eq!(priority, PriorityFilter::All);
                assert_eq!(status, StatusFilter::All);
            }
            _ => panic!("Expected tasks list"),
        }
    }

    #[test]
    fn test_cli_tasks_list_filters() {
        let cli = Cli::try_parse_from([
            "taskflow", "tasks", "list", "-s", "report", "-p", "HIGH", "--status", "pending",
        ])
        .unwrap();
        match cli.command {
            Commands::Tasks(TasksArgs {
                command: Some(TaskCommands::List { search, priority, status }),
            }) => {
                assert_eq!(search.as_deref(), Some("report"));
                assert_eq!(priority, PriorityFilter::Only(Priority::High));
                assert_eq!(status, StatusFilter::Pending);
            }
            _ => panic!("Expected tasks list"),
        }
    }

    #[test]
    fn test_cli_tasks_add() {
        let cli = Cli::try_parse_from([
            "taskflow", "tasks", "add", "Call the bank", "-p", "low", "-c", "Personal", "--due",
            "2024-02-01",
        ])
        .unwrap();
        match cli.command {
            Commands::Tasks(TasksArgs {
                command: Some(TaskCommands::Add { title, priority, category, due, description }),
            }) => {
                assert_eq!(title, "Call the bank");
                assert_eq!(priority, Some(Priority::Low));
                assert_eq!(category.as_deref(), Some("Personal"));
                assert_eq!(due, NaiveDate::from_ymd_opt(2024, 2, 1));
                assert_eq!(description, None);
            }
            _ => panic!("Expected tasks add"),
        }
    }

    #[test]
    fn test_cli_priority_flag_is_case_insensitive() {
        let cases = [
            ("High", Priority::High),
            ("MEDIUM", Priority::Medium),
            (" low ", Priority::Low),
        ];
        for (raw, expected) in cases {
            let cli = Cli::try_parse_from(["taskflow", "tasks", "add", "x", "-p", raw]).unwrap();
            match cli.command {
                Commands::Tasks(TasksArgs {
                    command: Some(TaskCommands::Add { priority, .. }),
                }) => assert_eq!(priority, Some(expected)),
                _ => panic!("Expected tasks add"),
            }
        }

        let cli = Cli::try_parse_from(["taskflow", "tasks", "edit", "2", "--priority", "High"])
            .unwrap();
        match cli.command {
            Commands::Tasks(TasksArgs {
                command: Some(TaskCommands::Edit { priority, .. }),
            }) => assert_eq!(priority, Some(Priority::High)),
            _ => panic!("Expected tasks edit"),
        }
    }

    #[test]
    fn test_cli_rejects_bad_priority_and_date() {
        assert!(Cli::try_parse_from(["taskflow", "tasks", "edit", "1", "-p", "urgent"]).is_err());
        assert!(Cli::try_parse_from(["taskflow", "tasks", "add", "x", "-p", "urgent"]).is_err());
        assert!(Cli::try_parse_from(["taskflow", "tasks", "add", "x", "--due", "soon"]).is_err());
        assert!(Cli::try_parse_from(["taskflow", "tasks", "show", "abc"]).is_err());
    }

    #[test]
    fn test_cli_stats_period() {
        let cli = Cli::try_parse_from(["taskflow", "stats", "categories", "--period", "year"])
            .unwrap();
        match cli.command {
            Commands::Stats(args) => {
                assert_eq!(args.command, Some(StatsCommands::Categories));
                assert_eq!(args.period, Some(StatsPeriod::Year));
            }
            _ => panic!("Expected stats"),
        }
    }

    #[test]
    fn test_cli_stats_without_subcommand() {
        let cli = Cli::try_parse_from(["taskflow", "stats"]).unwrap();
        match cli.command {
            Commands::Stats(args) => {
                assert_eq!(args.command, None);
                assert_eq!(args.period, None);
            }
            _ => panic!("Expected stats"),
        }
    }

    #[test]
    fn test_cli_settings_set() {
        let cli =
            Cli::try_parse_from(["taskflow", "settings", "set", "display.theme", "dark"]).unwrap();
        match cli.command {
            Commands::Settings(SettingsArgs {
                command: Some(SettingsCommands::Set { key, value }),
            }) => {
                assert_eq!(key, "display.theme");
                assert_eq!(value, "dark");
            }
            _ => panic!("Expected settings set"),
        }
    }

    #[test]
    fn test_cli_settings_show_tab() {
        let cli = Cli::try_parse_from(["taskflow", "settings", "show", "--tab", "data"]).unwrap();
        match cli.command {
            Commands::Settings(SettingsArgs {
                command: Some(SettingsCommands::Show { tab }),
            }) => assert_eq!(tab, Some(SettingsTab::Data)),
            _ => panic!("Expected settings show"),
        }
    }

    #[test]
    fn test_cli_completions() {
        let cli = Cli::try_parse_from(["taskflow", "completions", "zsh"]).unwrap();
        match cli.command {
            Commands::Completions { shell, install } => {
                assert_eq!(shell, Shell::Zsh);
                assert!(!install);
            }
            _ => panic!("Expected completions"),
        }
    }

    #[test]
    fn test_cli_debug_assert() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
