//! Dashboard aggregation.

use chrono::{DateTime, Utc};

use crate::entities::{Task, ViewConfig};

/// Counts and the shortlist shown on the dashboard
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary<'a> {
    /// Pending tasks due within the urgent window
    pub urgent: usize,

    /// Pending tasks that are not urgent, overdue ones included
    pub upcoming: usize,

    pub completed: usize,

    pub total: usize,

    /// Pending tasks with the nearest deadlines
    pub recent_pending: Vec<&'a Task>,
}

/// Whether a pending task counts as urgent: due in `0..=window_days` days.
///
/// Overdue tasks are not urgent.
pub fn is_urgent(task: &Task, now: DateTime<Utc>, window_days: i64) -> bool {
    (0..=window_days).contains(&task.days_until(now))
}

/// Summarize `tasks` relative to `now`
pub fn summarize<'a>(
    tasks: &'a [Task],
    now: DateTime<Utc>,
    config: &ViewConfig,
) -> DashboardSummary<'a> {
    let mut pending: Vec<&Task> = tasks.iter().filter(|t| t.is_pending()).collect();

    let urgent = pending
        .iter()
        .filter(|t| is_urgent(t, now, config.urgent_window_days))
        .count();

    let upcoming = pending.len() - urgent;
    let completed = tasks.len() - pending.len();

    pending.sort_by_key(|t| t.deadline);
    pending.truncate(config.dashboard_limit);

    DashboardSummary {
        urgent,
        upcoming,
        completed,
        total: tasks.len(),
        recent_pending: pending,
    }
}
