//! Completion statistics, subject breakdown and activity timeline.

use chrono::{DateTime, Utc};

use crate::entities::{Task, ViewConfig};

/// Share of the pending workload held by one subject
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubjectShare {
    pub subject: String,
    pub count: usize,

    /// Rounded percentage of all pending tasks
    pub percentage: u32,
}

/// What a timeline entry reports.
///
/// Completion time is not recorded, so a completed task always reads as
/// completed at its creation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivityKind {
    Created,
    Completed,
}

impl std::fmt::Display for ActivityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Created => write!(f, "Created"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry<'a> {
    pub kind: ActivityKind,
    pub task: &'a Task,
}

impl ActivityEntry<'_> {
    pub fn timestamp(&self) -> DateTime<Utc> {
        self.task.created_at
    }
}

/// Everything the progress view shows
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressReport<'a> {
    pub completion_rate: u32,
    pub completed: usize,
    pub total: usize,
    pub subjects: Vec<SubjectShare>,
    pub activity: Vec<ActivityEntry<'a>>,
}

pub fn analyze<'a>(tasks: &'a [Task], config: &ViewConfig) -> ProgressReport<'a> {
    ProgressReport {
        completion_rate: completion_rate(tasks),
        completed: tasks.iter().filter(|t| t.completed).count(),
        total: tasks.len(),
        subjects: subject_distribution(tasks),
        activity: recent_activity(tasks, config.activity_limit),
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn rounded_percent(part: usize, whole: usize) -> u32 {
    if whole == 0 {
        0
    } else {
        (part as f64 / whole as f64 * 100.0).round() as u32
    }
}

/// Percentage of tasks completed, rounded; 0 for an empty list
pub fn completion_rate(tasks: &[Task]) -> u32 {
    let completed = tasks.iter().filter(|t| t.completed).count();
    rounded_percent(completed, tasks.len())
}

/// Pending tasks grouped by subject, largest group first.
///
/// Groups with equal counts keep the order their subject first appears in.
pub fn subject_distribution(tasks: &[Task]) -> Vec<SubjectShare> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for task in tasks.iter().filter(|t| t.is_pending()) {
        match counts.iter_mut().find(|(s, _)| *s == task.subject) {
            Some((_, count)) => *count += 1,
            None => counts.push((task.subject.as_str(), 1)),
        }
    }

    let pending: usize = counts.iter().map(|(_, c)| c).sum();
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .map(|(subject, count)| SubjectShare {
            subject: subject.to_string(),
            count,
            percentage: rounded_percent(count, pending),
        })
        .collect()
}

/// Most recently created tasks, newest first
pub fn recent_activity(tasks: &[Task], limit: usize) -> Vec<ActivityEntry<'_>> {
    let mut recent: Vec<&Task> = tasks.iter().collect();
    recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    recent
        .into_iter()
        .take(limit)
        .map(|task| ActivityEntry {
            kind: if task.completed {
                ActivityKind::Completed
            } else {
                ActivityKind::Created
            },
            task,
        })
        .collect()
}
