//! taskflow - task statistics from the command line
//!
//! This crate computes completion statistics over a task collection
//! (totals, completion rate, priority and category breakdowns, average
//! completion time, weekday activity) and provides a small task board,
//! list filtering, and tabbed user preferences behind a CLI.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod output;
pub mod overview;
pub mod stats;
pub mod tasks;

pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::TaskFlowError;
pub use stats::{compute_statistics, TaskStatistics};
pub use tasks::{Priority, Task, TaskBoard};
