//! Study tasks CLI - track assignments, deadlines and progress.

#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::disallowed_macros)]
#![allow(clippy::uninlined_format_args)]

use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate, Utc};
use clap::{Parser, Subcommand};
use colored::Colorize;
use dialoguer::{theme::ColorfulTheme, Confirm};

use study_tasks::domain::{dashboard, filter, progress};
use study_tasks::{
    ui, CalendarBuilder, ConfigDomain, Difficulty, FileBlobStore, MonthCursor, StatusFilter,
    TaskDraft, TaskFilter, TaskPriority, TaskStore, TasksError, TrackerConfig,
};

#[derive(Parser)]
#[command(name = "study-tasks")]
#[command(about = "Track study tasks, deadlines and progress", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Directory holding tasks and configuration
    #[arg(long, global = true, default_value = ".study-tasks")]
    data_dir: PathBuf,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new task
    Add {
        /// Task title
        #[arg(short, long)]
        title: String,

        /// Subject or category
        #[arg(short, long)]
        subject: String,

        /// Priority (low, medium, high)
        #[arg(short, long)]
        priority: String,

        /// Deadline (YYYY-MM-DD)
        #[arg(short, long)]
        deadline: String,

        /// Difficulty (easy, medium, hard)
        #[arg(long)]
        difficulty: String,

        /// Estimated time in hours
        #[arg(short, long)]
        estimate: Option<f64>,

        /// Free-form notes
        #[arg(short, long, default_value = "")]
        notes: String,
    },

    /// List tasks ordered by deadline
    List {
        /// Filter by subject
        #[arg(long)]
        subject: Option<String>,

        /// Filter by priority
        #[arg(long)]
        priority: Option<String>,

        /// Filter by status (pending, completed)
        #[arg(long)]
        status: Option<String>,
    },

    /// Toggle a task between pending and completed
    Toggle {
        /// Task ID
        id: u64,
    },

    /// Delete a task
    Delete {
        /// Task ID
        id: u64,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Show urgent and upcoming counts with the nearest deadlines
    Dashboard,

    /// Show a month calendar
    Calendar {
        /// Year (defaults to the current year)
        #[arg(long)]
        year: Option<i32>,

        /// Month, 1-12 (defaults to the current month)
        #[arg(long)]
        month: Option<u32>,
    },

    /// Show completion rate, subject breakdown and recent activity
    Progress,

    /// List known subjects
    Subjects,

    /// Show or change configuration
    Config {
        /// Store tasks under a different blob key
        #[arg(long)]
        storage_key: Option<String>,
    },
}

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        ui::print_error(&format!("{e:#}"));
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config_domain = ConfigDomain::new(&cli.data_dir);

    let config: TrackerConfig = config_domain.load()?;
    let mut store = TaskStore::open(FileBlobStore::new(&cli.data_dir), &config.storage_key);
    let views = &config.views;
    let now = Utc::now();
    let today = Local::now().date_naive();

    match cli.command {
        Commands::Add {
            title,
            subject,
            priority,
            deadline,
            difficulty,
            estimate,
            notes,
        } => {
            let mut draft = TaskDraft::new(title, subject)
                .priority(priority.parse::<TaskPriority>()?)
                .deadline(parse_date(&deadline)?)
                .difficulty(difficulty.parse::<Difficulty>()?)
                .notes(notes);
            draft.estimated_time = estimate;

            let task = store.add(draft)?;
            ui::print_success(&format!(
                "Added task {}: {} [{}]",
                task.id,
                task.title,
                ui::priority_colored(task.priority)
            ));
        }

        Commands::List {
            subject,
            priority,
            status,
        } => {
            let mut criteria = TaskFilter::new();
            if let Some(subject) = subject {
                criteria = criteria.subject(subject);
            }
            if let Some(priority) = priority {
                criteria = criteria.priority(priority.parse()?);
            }
            criteria.status = StatusFilter::parse_optional(status.as_deref().unwrap_or(""))?;

            let outcome = filter::filter_tasks(store.all(), &criteria);
            if outcome.is_no_tasks() {
                ui::print_info("No tasks yet");
            } else if outcome.is_no_matches() {
                ui::print_info("No tasks found matching your filters");
            } else {
                println!("{}", ui::task_table(&outcome.tasks, now));
                println!();
                ui::print_info(&format!(
                    "{} of {} task(s) shown",
                    outcome.len(),
                    outcome.source_len
                ));
            }
        }

        Commands::Toggle { id } => {
            let task = store.toggle_complete(id)?;
            let state = if task.completed { "completed" } else { "pending" };
            ui::print_success(&format!("Task {} is now {}", task.id, state));
        }

        Commands::Delete { id, yes } => {
            let task = store.get(id).ok_or(TasksError::TaskNotFound { id })?;

            if !yes {
                let proceed = Confirm::with_theme(&ColorfulTheme::default())
                    .with_prompt(format!("Delete task '{}'?", task.title))
                    .default(false)
                    .interact()
                    .context("confirmation prompt failed")?;

                if !proceed {
                    println!("{}", "Delete cancelled.".yellow());
                    return Ok(());
                }
            }

            let removed = store.delete(id)?;
            ui::print_success(&format!("Deleted task {}: {}", removed.id, removed.title));
        }

        Commands::Dashboard => {
            let summary = dashboard::summarize(store.all(), now, views);
            ui::display_dashboard(&summary, now);
        }

        Commands::Calendar { year, month } => {
            let current = MonthCursor::containing(today);
            let year = year.unwrap_or(current.year);
            let month = match month {
                Some(m @ 1..=12) => m - 1,
                Some(m) => anyhow::bail!("month must be between 1 and 12, got {m}"),
                None => current.month,
            };

            let grid = CalendarBuilder::from_config(views).build(store.all(), year, month, today)?;
            println!("{}", grid.title().cyan().bold());
            println!("{}", ui::calendar_table(&grid));
        }

        Commands::Progress => {
            let report = progress::analyze(store.all(), views);
            ui::display_progress(&report);
        }

        Commands::Config { storage_key } => {
            show_config(&config_domain, storage_key.as_deref())?;
        }

        Commands::Subjects => {
            let subjects = filter::subjects(store.all());
            if subjects.is_empty() {
                ui::print_info("No subjects yet");
            }
            for subject in subjects {
                println!("  {} {}", "•".dimmed(), subject);
            }
        }
    }

    Ok(())
}

fn show_config(domain: &ConfigDomain, storage_key: Option<&str>) -> Result<(), TasksError> {
    if let Some(key) = storage_key {
        domain.set_storage_key(key)?;
        ui::print_success(&format!("Tasks will be stored under '{key}'"));
    }

    let config = domain.load()?;
    let views = domain.get_views()?;
    println!("{}", domain.config_path().display().to_string().dimmed());
    println!("{}: {}", "Storage key".bold(), config.storage_key);
    println!("{}: {} day(s)", "Urgent window".bold(), views.urgent_window_days);
    println!("{}: {}", "Dashboard limit".bold(), views.dashboard_limit);
    println!("{}: {}", "Activity limit".bold(), views.activity_limit);
    println!("{}: {}", "Calendar cells".bold(), views.calendar_cells);
    Ok(())
}

fn parse_date(value: &str) -> Result<NaiveDate, TasksError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| TasksError::InvalidDate {
        value: value.to_string(),
    })
}
