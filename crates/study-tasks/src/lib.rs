#![warn(clippy::pedantic)]
// Allow common pedantic lints that don't affect correctness
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! # Study Tasks
//!
//! A task tracker for study and work assignments.
//!
//! This crate provides:
//! - A task store persisted as one JSON blob per key
//! - Filtering and deadline ordering of the task list
//! - Dashboard counts (urgent, upcoming, completed)
//! - A month calendar with tasks bucketed by deadline
//! - Completion progress, subject breakdown and an activity timeline
//!
//! ## Example
//!
//! ```rust,ignore
//! use study_tasks::{FileBlobStore, TaskStore, TaskFilter};
//! use study_tasks::domain::filter::filter_tasks;
//!
//! let store = TaskStore::open(FileBlobStore::new(".study-tasks"), "tasks");
//! let pending = filter_tasks(store.all(), &TaskFilter::new().subject("Math"));
//! ```

// Core entities
pub mod entities;

// Error types
pub mod errors;

// Blob storage backends
pub mod storage;

// Task store and derived views
pub mod domain;

// Terminal UI helpers
pub mod ui;

// Re-export key types for convenience
pub use domain::{
    CalendarBuilder, CalendarGrid, ConfigDomain, DashboardSummary, FilterOutcome, MonthCursor,
    ProgressReport, StatusFilter, TaskFilter, TaskStore,
};
pub use entities::{
    DeadlineStatus, Difficulty, Task, TaskDraft, TaskPriority, TrackerConfig, ViewConfig,
};
pub use errors::{TasksError, TasksResult};
pub use storage::{BlobStore, FileBlobStore, MemoryBlobStore};
