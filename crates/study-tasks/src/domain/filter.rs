//! Task list filtering and ordering.

use std::collections::BTreeSet;

use crate::entities::{Task, TaskPriority};
use crate::errors::{TasksError, TasksResult};

/// Completion-state criterion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Completed,
}

impl StatusFilter {
    /// Parse a criterion where an empty string means "any status"
    pub fn parse_optional(s: &str) -> TasksResult<Option<Self>> {
        if s.trim().is_empty() {
            Ok(None)
        } else {
            s.parse().map(Some)
        }
    }

    fn matches(self, task: &Task) -> bool {
        match self {
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

impl std::str::FromStr for StatusFilter {
    type Err = TasksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "completed" | "done" => Ok(Self::Completed),
            _ => Err(TasksError::InvalidStatusFilter {
                status: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Completed => write!(f, "completed"),
        }
    }
}

/// Filter criteria; `None` places no constraint
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub subject: Option<String>,
    pub priority: Option<TaskPriority>,
    pub status: Option<StatusFilter>,
}

impl TaskFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one subject; an empty subject clears the criterion
    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        let subject = subject.into();
        self.subject = (!subject.is_empty()).then_some(subject);
        self
    }

    pub fn priority(mut self, priority: TaskPriority) -> Self {
        self.priority = Some(priority);
        self
    }

    pub fn status(mut self, status: StatusFilter) -> Self {
        self.status = Some(status);
        self
    }

    /// Whether no criterion is set
    pub fn is_unconstrained(&self) -> bool {
        self.subject.is_none() && self.priority.is_none() && self.status.is_none()
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(subject) = self.subject.as_deref() {
            if !subject.is_empty() && task.subject != subject {
                return false;
            }
        }
        if self.priority.is_some_and(|p| task.priority != p) {
            return false;
        }
        match self.status {
            Some(status) => status.matches(task),
            None => true,
        }
    }
}

/// Tasks that passed a filter, plus the size of the list they came from
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    /// Matching tasks, earliest deadline first
    pub tasks: Vec<&'a Task>,

    /// Number of tasks the filter was applied to
    pub source_len: usize,
}

impl FilterOutcome<'_> {
    /// There was nothing to filter
    pub fn is_no_tasks(&self) -> bool {
        self.source_len == 0
    }

    /// Tasks exist but none matched
    pub fn is_no_matches(&self) -> bool {
        self.source_len > 0 && self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

/// Apply `filter` and sort the matches by ascending deadline.
///
/// Tasks sharing a deadline keep their relative order.
pub fn filter_tasks<'a>(tasks: &'a [Task], filter: &TaskFilter) -> FilterOutcome<'a> {
    let mut matched: Vec<&Task> = tasks.iter().filter(|t| filter.matches(t)).collect();
    matched.sort_by_key(|t| t.deadline);

    FilterOutcome {
        tasks: matched,
        source_len: tasks.len(),
    }
}

/// Distinct subjects in sorted order, for populating a subject picker
pub fn subjects(tasks: &[Task]) -> Vec<&str> {
    tasks
        .iter()
        .map(|t| t.subject.as_str())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Difficulty;
    use chrono::{NaiveDate, Utc};

    fn task(id: u64, subject: &str, priority: TaskPriority, day: u32, completed: bool) -> Task {
        Task {
            id,
            title: format!("Task {id}"),
            subject: subject.to_string(),
            priority,
            deadline: NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            difficulty: Difficulty::Medium,
            estimated_time: None,
            notes: String::new(),
            completed,
            created_at: Utc::now(),
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task(1, "Math", TaskPriority::High, 20, false),
            task(2, "Physics", TaskPriority::Low, 5, true),
            task(3, "Math", TaskPriority::Low, 12, true),
            task(4, "Chemistry", TaskPriority::High, 12, false),
        ]
    }

    fn ids(outcome: &FilterOutcome<'_>) -> Vec<u64> {
        outcome.tasks.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_no_criteria_sorts_by_deadline() {
        let tasks = sample();
        let outcome = filter_tasks(&tasks, &TaskFilter::new());
        assert_eq!(ids(&outcome), vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_status_criteria() {
        let tasks = sample();

        let pending = filter_tasks(&tasks, &TaskFilter::new().status(StatusFilter::Pending));
        assert!(pending.tasks.iter().all(|t| !t.completed));
        assert_eq!(ids(&pending), vec![4, 1]);

        let completed = filter_tasks(&tasks, &TaskFilter::new().status(StatusFilter::Completed));
        assert!(completed.tasks.iter().all(|t| t.completed));
        assert_eq!(ids(&completed), vec![2, 3]);
    }

    #[test]
    fn test_subject_and_priority_combine() {
        let tasks = sample();
        let filter = TaskFilter::new().subject("Math").priority(TaskPriority::Low);
        assert_eq!(ids(&filter_tasks(&tasks, &filter)), vec![3]);
    }

    #[test]
    fn test_disjoint_criteria_yield_no_matches() {
        let tasks = sample();
        let filter = TaskFilter::new().subject("Physics").priority(TaskPriority::High);
        let outcome = filter_tasks(&tasks, &filter);
        assert!(outcome.is_empty());
        assert!(outcome.is_no_matches());
        assert!(!outcome.is_no_tasks());

        let empty = filter_tasks(&[], &filter);
        assert!(empty.is_no_tasks());
        assert!(!empty.is_no_matches());
    }

    #[test]
    fn test_empty_subject_is_unconstrained() {
        assert!(TaskFilter::new().subject("").is_unconstrained());
    }

    #[test]
    fn test_status_filter_parsing() {
        assert_eq!(StatusFilter::parse_optional("").unwrap(), None);
        assert_eq!(
            StatusFilter::parse_optional("completed").unwrap(),
            Some(StatusFilter::Completed)
        );
        assert!(StatusFilter::parse_optional("archived").is_err());
    }

    #[test]
    fn test_subjects_sorted_unique() {
        let tasks = sample();
        assert_eq!(subjects(&tasks), vec!["Chemistry", "Math", "Physics"]);
    }
}
