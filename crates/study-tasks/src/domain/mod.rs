//! Domain facades for task tracking.
//!
//! `TaskStore` owns the task list; the remaining modules are pure views
//! computed from a read-only slice of it.

pub mod calendar;
mod config;
pub mod dashboard;
pub mod filter;
pub mod progress;
mod store;

pub use calendar::{CalendarBuilder, CalendarCell, CalendarDay, CalendarGrid, MonthCursor};
pub use config::ConfigDomain;
pub use dashboard::DashboardSummary;
pub use filter::{FilterOutcome, StatusFilter, TaskFilter};
pub use progress::{ActivityEntry, ActivityKind, ProgressReport, SubjectShare};
pub use store::TaskStore;
