//! Task analytics.
//!
//! - Summary statistics (totals, completion rate, priority and category
//!   breakdowns, average completion time)
//! - Created/completed activity by weekday
//! - Period selection for the analytics view
//! - Terminal charts

pub mod activity;
pub mod period;
pub mod summary;
pub mod visualization;

pub use activity::{weekday_activity, DayActivity, WeekdayActivity};
pub use period::StatsPeriod;
pub use summary::{compute_statistics, percent, Bucket, PriorityStats, TaskStatistics};
pub use visualization::{render_bar_chart, render_progress_bar, render_sparkline, render_summary_box};
