//! In-memory task collection.
//!
//! The board is owned by its caller and lives only as long as the caller
//! keeps it. Nothing is written to disk.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::TaskFlowError;
use crate::tasks::{NewTask, Task, TaskEdit};

/// Category assigned to new tasks created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// An ordered task collection, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskBoard {
    tasks: Vec<Task>,
}

impl TaskBoard {
    #[must_use]
    pub const fn new(tasks: Vec<Task>) -> Self {
        Self { tasks }
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Id the next created task receives: one past the largest id in use.
    ///
    /// `None` once `u64::MAX` is taken.
    #[must_use]
    pub fn next_id(&self) -> Option<u64> {
        self.tasks
            .iter()
            .map(|t| t.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1))
    }

    /// Create a task and place it at the front of the board.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::InvalidInput` if the title is blank or no id
    /// is left.
    pub fn add(&mut self, new_task: NewTask, today: NaiveDate) -> Result<&Task, TaskFlowError> {
        let title = validate_title(&new_task.title)?;
        let id = self.next_id().ok_or_else(|| {
            TaskFlowError::InvalidInput(format!("no task id left after {}", u64::MAX))
        })?;

        let task = Task {
            id,
            title,
            description: new_task.description,
            priority: new_task.priority,
            category: category_or_default(new_task.category),
            completed: false,
            created_at: today,
            completed_at: None,
            due_date: new_task.due_date,
        };
        debug!(id = task.id, title = %task.title, "adding task");

        self.tasks.insert(0, task);
        Ok(&self.tasks[0])
    }

    /// Apply a partial update to an existing task.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::NotFound` for an unknown id and
    /// `TaskFlowError::InvalidInput` if the edit blanks the title.
    pub fn edit(&mut self, id: u64, edit: TaskEdit) -> Result<&Task, TaskFlowError> {
        let title = edit.title.as_deref().map(validate_title).transpose()?;
        let task = self.find_mut(id)?;

        if let Some(title) = title {
            task.title = title;
        }
        if let Some(description) = edit.description {
            task.description = description;
        }
        if let Some(priority) = edit.priority {
            task.priority = priority;
        }
        if let Some(category) = edit.category {
            task.category = category_or_default(category);
        }
        if let Some(due) = edit.due_date {
            task.due_date = Some(due);
        }
        debug!(id, "edited task");

        Ok(task)
    }

    /// Remove a task, returning it.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::NotFound` for an unknown id.
    pub fn delete(&mut self, id: u64) -> Result<Task, TaskFlowError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| not_found(id))?;
        debug!(id, "deleting task");
        Ok(self.tasks.remove(index))
    }

    /// Flip a task between completed and pending.
    ///
    /// Completing stamps `completed_at` with `today`; reopening clears it.
    ///
    /// # Errors
    ///
    /// Returns `TaskFlowError::NotFound` for an unknown id.
    pub fn toggle(&mut self, id: u64, today: NaiveDate) -> Result<&Task, TaskFlowError> {
        let task = self.find_mut(id)?;
        task.completed = !task.completed;
        task.completed_at = task.completed.then_some(today);
        debug!(id, completed = task.completed, "toggled task");
        Ok(task)
    }

    fn find_mut(&mut self, id: u64) -> Result<&mut Task, TaskFlowError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or_else(|| not_found(id))
    }
}

impl From<Vec<Task>> for TaskBoard {
    fn from(tasks: Vec<Task>) -> Self {
        Self::new(tasks)
    }
}

fn validate_title(title: &str) -> Result<String, TaskFlowError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TaskFlowError::InvalidInput(
            "task title must not be empty".to_string(),
        ));
    }
    Ok(trimmed.to_string())
}

fn category_or_default(category: String) -> String {
    if category.trim().is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        category
    }
}

fn not_found(id: u64) -> TaskFlowError {
    TaskFlowError::NotFound(format!("task {id}"))
}
