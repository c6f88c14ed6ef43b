//! Task command implementation.
//!
//! Edits apply to the collection loaded for this invocation. The result is
//! printed instead of written back: JSON output is the full collection in
//! the `--file` format, pretty output is a confirmation line plus the list.

use colored::Colorize;
use tracing::info;

use crate::cli::args::{OutputFormat, TaskCommands};
use crate::error::TaskFlowError;
use crate::output::{format_task, format_tasks, format_tasks_pretty, to_json};
use crate::tasks::{
    NewTask, PriorityFilter, SampleSet, StatusFilter, TaskBoard, TaskEdit, TaskFilter,
};

use super::Context;

/// Execute task subcommands.
///
/// # Errors
///
/// Returns an error if the tasks cannot be loaded, the id is unknown, the
/// input is rejected, or output formatting fails.
pub fn tasks(
    ctx: &Context,
    cmd: Option<TaskCommands>,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    let mut board = TaskBoard::new(ctx.load_tasks(SampleSet::TaskList)?);

    let cmd = cmd.unwrap_or(TaskCommands::List {
        search: None,
        priority: PriorityFilter::All,
        status: StatusFilter::All,
    });

    match cmd {
        TaskCommands::List { search, priority, status } => {
            let filter = TaskFilter {
                search: search.unwrap_or_default(),
                priority,
                status,
            };
            let matching = filter.apply(board.tasks());
            format_tasks(&matching, "Tasks", format, ctx.display())
        }
        TaskCommands::Show { id } => {
            let task = board
                .get(id)
                .ok_or_else(|| TaskFlowError::NotFound(format!("task {id}")))?;
            format_task(task, format, ctx.display())
        }
        TaskCommands::Add { title, description, priority, category, due } => {
            let new_task = NewTask {
                title,
                description: description.unwrap_or_default(),
                priority: priority.unwrap_or_default(),
                category: category.unwrap_or_default(),
                due_date: due,
            };
            let task = board.add(new_task, ctx.today)?;
            let message = format!("Added task #{}: {}", task.id, task.title);
            info!(id = task.id, "task added");
            render_board(ctx, &board, &message, format)
        }
        TaskCommands::Edit { id, title, description, priority, category, due } => {
            let edit = TaskEdit {
                title,
                description,
                priority,
                category,
                due_date: due,
            };
            if edit.is_empty() {
                return Err(TaskFlowError::InvalidInput(
                    "nothing to change (pass --title, --description, --priority, --category or --due)"
                        .to_string(),
                ));
            }
            let task = board.edit(id, edit)?;
            let message = format!("Updated task #{}: {}", task.id, task.title);
            render_board(ctx, &board, &message, format)
        }
        TaskCommands::Delete { id } => {
            let task = board.delete(id)?;
            let message = format!("Deleted task #{}: {}", task.id, task.title);
            render_board(ctx, &board, &message, format)
        }
        TaskCommands::Toggle { id } => {
            let task = board.toggle(id, ctx.today)?;
            let state = if task.completed { "completed" } else { "pending" };
            let message = format!("Task #{} is now {state}: {}", task.id, task.title);
            render_board(ctx, &board, &message, format)
        }
    }
}

fn render_board(
    ctx: &Context,
    board: &TaskBoard,
    message: &str,
    format: OutputFormat,
) -> Result<String, TaskFlowError> {
    match format {
        OutputFormat::Json => to_json(board.tasks()),
        OutputFormat::Pretty => {
            let all: Vec<_> = board.tasks().iter().collect();
            Ok(format!(
                "{}\n\n{}",
                message.green(),
                format_tasks_pretty(&all, "Tasks", ctx.display())
            ))
        }
    }
}
