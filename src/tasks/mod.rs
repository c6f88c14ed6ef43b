//! Task records and the caller-owned operations on them.

pub mod board;
pub mod filter;
mod sample;
mod source;
pub mod types;

pub use board::{TaskBoard, DEFAULT_CATEGORY};
pub use filter::{PriorityFilter, StatusFilter, TaskFilter};
pub use sample::{analytics_sample, task_list_sample, SampleSet};
pub use source::{load_tasks, parse_tasks};
pub use types::*;
