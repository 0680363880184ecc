//! Core data structures for task tracking.

mod config;
mod draft;
mod task;

pub use config::{TrackerConfig, ViewConfig};
pub use draft::TaskDraft;
pub use task::{days_until, DeadlineStatus, Difficulty, Task, TaskPriority, MILLIS_PER_DAY};
