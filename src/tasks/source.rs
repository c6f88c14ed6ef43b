//! Loading task collections.
//!
//! Task files are JSON, either a bare array of tasks or an object with a
//! `tasks` array (the shape of a settings export). Files are only read.

use std::path::Path;

use serde::Deserialize;
use tracing::{debug, info};

use crate::error::TaskFlowError;
use crate::tasks::{SampleSet, Task};

#[derive(Deserialize)]
#[serde(untagged)]
enum TaskDocument {
    Bare(Vec<Task>),
    Wrapped { tasks: Vec<Task> },
}

/// Parse a task collection from JSON text.
///
/// # Errors
///
/// Returns `TaskFlowError::Parse` if the text is neither shape.
pub fn parse_tasks(json: &str) -> Result<Vec<Task>, TaskFlowError> {
    let doc: TaskDocument = serde_json::from_str(json).map_err(|e| {
        TaskFlowError::Parse(format!(
            "expected a task array or an object with a \"tasks\" array: {e}"
        ))
    })?;
    Ok(match doc {
        TaskDocument::Bare(tasks) | TaskDocument::Wrapped { tasks } => tasks,
    })
}

/// Load tasks from `path`, or the `fallback` sample when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_tasks(path: Option<&Path>, fallback: SampleSet) -> Result<Vec<Task>, TaskFlowError> {
    let Some(path) = path else {
        debug!(sample = ?fallback, "no task file configured, using sample data");
        return Ok(fallback.tasks());
    };

    let contents = std::fs::read_to_string(path).map_err(|e| {
        TaskFlowError::Config(format!("Failed to read task file {}: {e}", path.display()))
    })?;
    let tasks = parse_tasks(&contents)?;
    info!(path = %path.display(), count = tasks.len(), "loaded tasks");
    Ok(tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::{analytics_sample, task_list_sample};
    use tempfile::TempDir;

    const ONE_TASK: &str = r#"{"id": 1, "title": "Only", "priority": "low", "category": "Work", "completed": false, "createdAt": "2024-01-01"}"#;

    #[test]
    fn test_parse_bare_array() {
        let tasks = parse_tasks(&format!("[{ONE_TASK}]")).unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Only");
    }

    #[test]
    fn test_parse_wrapped_document() {
        let json = format!(r#"{{"exportDate": "2024-01-12T10:00:00Z", "tasks": [{ONE_TASK}]}}"#);
        let tasks = parse_tasks(&json).unwrap();
        assert_eq!(tasks.len(), 1);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(parse_tasks("{\"nope\": 1}"), Err(TaskFlowError::Parse(_))));
    }

    #[test]
    fn test_load_without_path_uses_sample() {
        assert_eq!(load_tasks(None, SampleSet::Analytics).unwrap(), analytics_sample());
        assert_eq!(load_tasks(None, SampleSet::TaskList).unwrap(), task_list_sample());
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("tasks.json");
        std::fs::write(&path, format!("[{ONE_TASK}]")).unwrap();

        let tasks = load_tasks(Some(&path), SampleSet::TaskList).unwrap();
        assert_eq!(tasks[0].id, 1);
    }

    #[test]
    fn test_load_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.json");
        assert!(matches!(
            load_tasks(Some(&path), SampleSet::Analytics),
            Err(TaskFlowError::Config(_))
        ));
    }
}
