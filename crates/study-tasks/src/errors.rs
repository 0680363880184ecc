//! Error types for the study-tasks crate.

use thiserror::Error;

/// Errors raised by task tracking operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TasksError {
    // Task errors
    #[error("Task '{id}' not found")]
    TaskNotFound { id: u64 },

    #[error("Missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("Invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    #[error("Invalid priority: '{priority}'")]
    InvalidPriority { priority: String },

    #[error("Invalid difficulty: '{difficulty}'")]
    InvalidDifficulty { difficulty: String },

    #[error("Invalid status filter: '{status}'")]
    InvalidStatusFilter { status: String },

    // Calendar errors
    #[error("Invalid month index {month} (expected 0-11)")]
    InvalidMonth { month: u32 },

    #[error("Invalid date: '{value}'")]
    InvalidDate { value: String },

    // Storage errors
    #[error("Storage error: {reason}")]
    StorageError { reason: String },

    #[error("Failed to read file '{path}': {reason}")]
    FileReadError { path: String, reason: String },

    #[error("Failed to write file '{path}': {reason}")]
    FileWriteError { path: String, reason: String },

    #[error("Failed to parse JSON: {reason}")]
    JsonParseError { reason: String },

    // Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },
}

impl TasksError {
    /// Whether this error is a rejected draft rather than an operational failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::MissingField { .. } | Self::InvalidField { .. })
    }
}

impl From<std::io::Error> for TasksError {
    fn from(err: std::io::Error) -> Self {
        Self::StorageError {
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for TasksError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError {
            reason: err.to_string(),
        }
    }
}

/// Result type alias for task tracking operations
pub type TasksResult<T> = Result<T, TasksError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TasksError::TaskNotFound { id: 123 };
        assert_eq!(err.to_string(), "Task '123' not found");
    }

    #[test]
    fn test_validation_classification() {
        assert!(TasksError::MissingField { field: "title" }.is_validation());
        assert!(!TasksError::TaskNotFound { id: 1 }.is_validation());
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let tasks_err: TasksError = io_err.into();
        assert!(matches!(tasks_err, TasksError::StorageError { .. }));
    }
}
