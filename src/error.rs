//! Error types for taskflow.

use thiserror::Error;

/// Errors returned by taskflow operations.
#[derive(Debug, Error)]
pub enum TaskFlowError {
    /// Configuration could not be resolved, read or written.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input could not be parsed or output could not be serialized.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A task or setting that does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// A value was rejected by validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<serde_json::Error> for TaskFlowError {
    fn from(e: serde_json::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

impl From<serde_yaml::Error> for TaskFlowError {
    fn from(e: serde_yaml::Error) -> Self {
        Self::Parse(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = TaskFlowError::NotFound("task 42".to_string());
        assert_eq!(err.to_string(), "Not found: task 42");

        let err = TaskFlowError::InvalidInput("title must not be empty".to_string());
        assert_eq!(err.to_string(), "Invalid input: title must not be empty");
    }

    #[test]
    fn test_json_error_converts_to_parse() {
        let json_err = serde_json::from_str::<u32>("not json").unwrap_err();
        let err: TaskFlowError = json_err.into();
        assert!(matches!(err, TaskFlowError::Parse(_)));
    }
}
