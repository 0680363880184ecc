//! Unvalidated task input.

use chrono::{DateTime, NaiveDate, Utc};

use super::{Difficulty, Task, TaskPriority};
use crate::errors::{TasksError, TasksResult};

/// User-supplied fields for a new task.
///
/// Nothing is checked until [`TaskDraft::into_task`], so a draft can be
/// filled in piece by piece from a form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub subject: String,
    pub priority: Option<TaskPriority>,
    pub deadline: Option<NaiveDate>,
    pub difficulty: Option<Difficulty>,
    pub estimated_time: Option<f64>,
    pub notes: String,
}

impl TaskDraft {
    /// Start a draft with its title and subject
    pub fn new(title: impl Into<String>, subject: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subject: subject.into(),
            ..Self::default()
        }
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn deadline(mut self, deadline: NaiveDate) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    pub fn estimated_time(mut self, hours: f64) -> Self {
        self.estimated_time = Some(hours);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    /// Check required fields without consuming the draft
    pub fn validate(&self) -> TasksResult<()> {
        self.required_fields().map(|_| ())
    }

    /// Validate and turn the draft into a pending task
    pub fn into_task(self, id: u64, created_at: DateTime<Utc>) -> TasksResult<Task> {
        let (priority, deadline, difficulty) = self.required_fields()?;

        Ok(Task {
            id,
            title: self.title.trim().to_string(),
            subject: self.subject.trim().to_string(),
            priority,
            deadline,
            difficulty,
            estimated_time: self.estimated_time,
            notes: self.notes,
            completed: false,
            created_at,
        })
    }

    fn required_fields(&self) -> TasksResult<(TaskPriority, NaiveDate, Difficulty)> {
        if self.title.trim().is_empty() {
            return Err(TasksError::MissingField { field: "title" });
        }
        if self.subject.trim().is_empty() {
            return Err(TasksError::MissingField { field: "subject" });
        }
        let priority = self
            .priority
            .ok_or(TasksError::MissingField { field: "priority" })?;
        let deadline = self
            .deadline
            .ok_or(TasksError::MissingField { field: "deadline" })?;
        let difficulty = self
            .difficulty
            .ok_or(TasksError::MissingField { field: "difficulty" })?;

        if let Some(hours) = self.estimated_time {
            if !hours.is_finite() || hours <= 0.0 {
                return Err(TasksError::InvalidField {
                    field: "estimatedTime",
                    reason: format!("expected a positive number of hours, got {hours}"),
                });
            }
        }

        Ok((priority, deadline, difficulty))
    }
}
