//! Terminal UI helpers for task display.
//!
//! This module uses println! for CLI output, which is appropriate
//! for terminal user interfaces.

#![allow(clippy::disallowed_macros)]

use chrono::{DateTime, Local, Utc};
use colored::Colorize;
use comfy_table::{Cell, Color, ContentArrangement, Table};

use crate::domain::{CalendarCell, CalendarGrid, DashboardSummary, ProgressReport};
use crate::entities::{DeadlineStatus, Task, TaskPriority};

/// Get colored priority string
pub fn priority_colored(priority: TaskPriority) -> String {
    match priority {
        TaskPriority::Low => "low".dimmed().to_string(),
        TaskPriority::Medium => "medium".yellow().to_string(),
        TaskPriority::High => "high".red().bold().to_string(),
    }
}

fn priority_color(priority: TaskPriority) -> Color {
    match priority {
        TaskPriority::Low => Color::DarkGrey,
        TaskPriority::Medium => Color::Yellow,
        TaskPriority::High => Color::Red,
    }
}

fn deadline_color(status: DeadlineStatus) -> Color {
    match status {
        DeadlineStatus::Overdue(_) => Color::Red,
        DeadlineStatus::DueToday | DeadlineStatus::DueTomorrow => Color::Yellow,
        DeadlineStatus::DueIn(_) => Color::White,
    }
}

/// Estimated hours, or "N/A"
pub fn estimate_label(task: &Task) -> String {
    task.estimated_time
        .map_or_else(|| "N/A".to_string(), |hours| format!("{hours}h"))
}

/// Create a table for displaying tasks
pub fn task_table(tasks: &[&Task], now: DateTime<Utc>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    // Header
    table.set_header(vec![
        Cell::new("ID").fg(Color::Cyan),
        Cell::new("Title").fg(Color::Cyan),
        Cell::new("Subject").fg(Color::Cyan),
        Cell::new("Priority").fg(Color::Cyan),
        Cell::new("Deadline").fg(Color::Cyan),
        Cell::new("Time").fg(Color::Cyan),
        Cell::new("Difficulty").fg(Color::Cyan),
        Cell::new("Done").fg(Color::Cyan),
    ]);

    for task in tasks {
        let deadline = task.deadline_status(now);
        let (done, done_color) = if task.completed {
            ("✓", Color::Green)
        } else {
            ("", Color::Reset)
        };

        table.add_row(vec![
            Cell::new(task.id),
            Cell::new(&task.title),
            Cell::new(&task.subject),
            Cell::new(task.priority.to_string()).fg(priority_color(task.priority)),
            Cell::new(format!("{} ({deadline})", task.deadline)).fg(deadline_color(deadline)),
            Cell::new(estimate_label(task)),
            Cell::new(task.difficulty.to_string()),
            Cell::new(done).fg(done_color),
        ]);
    }

    table
}

/// Display dashboard counters and the nearest pending tasks
pub fn display_dashboard(summary: &DashboardSummary<'_>, now: DateTime<Utc>) {
    println!("{}", "Dashboard".cyan().bold());
    println!("{}", "═".repeat(60).dimmed());
    println!(
        "{} {}   {} {}   {} {}   {} {}",
        "Urgent:".bold(),
        summary.urgent.to_string().red(),
        "Upcoming:".bold(),
        summary.upcoming.to_string().yellow(),
        "Completed:".bold(),
        summary.completed.to_string().green(),
        "Total:".bold(),
        summary.total
    );
    println!();

    if summary.recent_pending.is_empty() {
        print_success("No pending tasks. Great job!");
    } else {
        println!("{}", task_table(&summary.recent_pending, now));
    }
}

/// Render a month grid, marking today and days with pending tasks
pub fn calendar_table(grid: &CalendarGrid<'_>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let mut header = Vec::new();
    for cell in &grid.cells {
        if let CalendarCell::Header(name) = cell {
            header.push(Cell::new(name).fg(Color::Cyan));
        }
    }
    table.set_header(header);

    for week in grid.weeks() {
        let row: Vec<Cell> = week
            .iter()
            .map(|cell| match cell {
                CalendarCell::PreviousMonth(d) | CalendarCell::NextMonth(d) => {
                    Cell::new(d).fg(Color::DarkGrey)
                }
                CalendarCell::Day(day) => {
                    let marks = "•".repeat(day.tasks.len());
                    let cell = Cell::new(format!("{} {marks}", day.day()));
                    if day.is_today {
                        cell.fg(Color::Green)
                    } else if day.tasks.is_empty() {
                        cell
                    } else {
                        cell.fg(Color::Yellow)
                    }
                }
                CalendarCell::Header(name) => Cell::new(name),
            })
            .collect();
        table.add_row(row);
    }

    table
}

/// Display completion rate, subject breakdown and recent activity
pub fn display_progress(report: &ProgressReport<'_>) {
    println!("{}", "Progress".cyan().bold());
    println!("{}", "═".repeat(60).dimmed());
    println!(
        "{}: {}% ({}/{})",
        "Completion".bold(),
        report.completion_rate.to_string().green().bold(),
        report.completed,
        report.total
    );
    println!();

    println!("{}", "Pending by subject".bold().underline());
    if report.subjects.is_empty() {
        println!("  No pending tasks");
    }
    for share in &report.subjects {
        let bar = "█".repeat((share.percentage / 5) as usize);
        println!(
            "  {:<16} {} {} ({}%)",
            share.subject,
            bar.blue(),
            share.count,
            share.percentage
        );
    }
    println!();

    println!("{}", "Recent activity".bold().underline());
    if report.activity.is_empty() {
        println!("  No activity yet");
    }
    for entry in &report.activity {
        let local = entry.timestamp().with_timezone(&Local);
        println!(
            "  {} {}: {} {}",
            "•".dimmed(),
            entry.kind,
            entry.task.title,
            local.format("%Y-%m-%d %H:%M").to_string().dimmed()
        );
    }
}

/// Print success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print error message
pub fn print_error(message: &str) {
    println!("{} {}", "✗".red().bold(), message);
}

/// Print info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
