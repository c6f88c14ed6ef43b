use crate::cli::args::OutputFormat;
use crate::error::TaskFlowError;
use crate::output::format_overview;
use crate::overview::Overview;
use crate::tasks::SampleSet;

use super::Context;

/// Execute the home command.
///
/// # Errors
///
/// Returns an error if the tasks cannot be loaded or output formatting fails.
pub fn home(ctx: &Context, format: OutputFormat) -> Result<String, TaskFlowError> {
    let tasks = ctx.load_tasks(SampleSet::TaskList)?;
    let overview = Overview::build(&tasks, ctx.config.general.recent_limit);
    format_overview(&overview, format, ctx.display())
}
