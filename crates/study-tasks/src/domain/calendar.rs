//! Month calendar grid.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::entities::{Task, ViewConfig};
use crate::errors::{TasksError, TasksResult};

/// Column headers, Sunday first
pub const WEEKDAY_HEADERS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A displayed month. `month` is 0-indexed (0 = January).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthCursor {
    pub year: i32,
    pub month: u32,
}

impl MonthCursor {
    pub fn new(year: i32, month: u32) -> TasksResult<Self> {
        if month > 11 {
            return Err(TasksError::InvalidMonth { month });
        }
        Ok(Self { year, month })
    }

    /// The month containing `date`
    pub fn containing(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month0(),
        }
    }

    /// The month before, wrapping into the previous year
    pub fn prev(self) -> Self {
        if self.month == 0 {
            Self {
                year: self.year - 1,
                month: 11,
            }
        } else {
            Self {
                year: self.year,
                month: self.month - 1,
            }
        }
    }

    /// The month after, wrapping into the next year
    pub fn next(self) -> Self {
        if self.month == 11 {
            Self {
                year: self.year + 1,
                month: 0,
            }
        } else {
            Self {
                year: self.year,
                month: self.month + 1,
            }
        }
    }

    /// Heading such as "February 2024"
    pub fn title(self) -> String {
        let name = MONTH_NAMES.get(self.month as usize).copied().unwrap_or("?");
        format!("{name} {}", self.year)
    }

    /// Day 1 of the month
    pub fn first_day(self) -> TasksResult<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month + 1, 1).ok_or_else(|| {
            TasksError::InvalidDate {
                value: format!("{}-{:02}-01", self.year, self.month + 1),
            }
        })
    }
}

/// One day of the displayed month
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarDay<'a> {
    pub date: NaiveDate,
    pub is_today: bool,

    /// Pending tasks due on this date
    pub tasks: Vec<&'a Task>,
}

impl CalendarDay<'_> {
    /// Day of month, 1-based
    pub fn day(&self) -> u32 {
        self.date.day()
    }
}

/// Grid cell, in display order
#[derive(Debug, Clone, PartialEq)]
pub enum CalendarCell<'a> {
    Header(&'static str),
    /// Day number from the previous month
    PreviousMonth(u32),
    Day(CalendarDay<'a>),
    /// Day number from the next month
    NextMonth(u32),
}

/// A month laid out for display
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid<'a> {
    pub cursor: MonthCursor,

    /// Weekday of day 1, 0 = Sunday
    pub first_day_of_week: u32,
    pub days_in_month: u32,
    pub days_in_prev_month: u32,

    pub cells: Vec<CalendarCell<'a>>,
}

impl<'a> CalendarGrid<'a> {
    pub fn title(&self) -> String {
        self.cursor.title()
    }

    /// Cells of the current month
    pub fn days(&self) -> impl Iterator<Item = &CalendarDay<'a>> {
        self.cells.iter().filter_map(|cell| match cell {
            CalendarCell::Day(day) => Some(day),
            _ => None,
        })
    }

    /// Day numbers shown before day 1
    pub fn leading_days(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                CalendarCell::PreviousMonth(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Day numbers shown after the last day
    pub fn trailing_days(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter_map(|cell| match cell {
                CalendarCell::NextMonth(d) => Some(*d),
                _ => None,
            })
            .collect()
    }

    /// Day cells (leading, current and trailing) split into weeks of seven
    pub fn weeks(&self) -> Vec<&[CalendarCell<'a>]> {
        let headers = WEEKDAY_HEADERS.len().min(self.cells.len());
        self.cells[headers..].chunks(7).collect()
    }
}

/// Builds month grids with a fixed cell budget
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarBuilder {
    /// Day cells in the grid, headers excluded
    pub total_cells: usize,

    /// Upper bound on next-month fill cells
    pub trailing_cap: usize,
}

impl Default for CalendarBuilder {
    fn default() -> Self {
        Self {
            total_cells: 42,
            trailing_cap: 14,
        }
    }
}

impl CalendarBuilder {
    pub fn new(total_cells: usize) -> Self {
        Self {
            total_cells,
            ..Self::default()
        }
    }

    pub fn from_config(config: &ViewConfig) -> Self {
        Self {
            total_cells: config.calendar_cells,
            trailing_cap: config.trailing_days_cap,
        }
    }

    /// Lay out `year`/`month` (0-indexed) with pending tasks bucketed by deadline
    pub fn build<'a>(
        &self,
        tasks: &'a [Task],
        year: i32,
        month: u32,
        today: NaiveDate,
    ) -> TasksResult<CalendarGrid<'a>> {
        self.build_cursor(tasks, MonthCursor::new(year, month)?, today)
    }

    pub fn build_cursor<'a>(
        &self,
        tasks: &'a [Task],
        cursor: MonthCursor,
        today: NaiveDate,
    ) -> TasksResult<CalendarGrid<'a>> {
        let first = cursor.first_day()?;
        let first_of_next = cursor.next().first_day()?;
        let last_of_prev = first.pred_opt().ok_or_else(|| TasksError::InvalidDate {
            value: format!("day before {first}"),
        })?;

        let first_day_of_week = first.weekday().num_days_from_sunday();
        let days_in_month = first_of_next.signed_duration_since(first).num_days();
        let days_in_month = u32::try_from(days_in_month).unwrap_or(0);
        let days_in_prev_month = last_of_prev.day();

        let mut due: HashMap<NaiveDate, Vec<&Task>> = HashMap::new();
        for task in tasks.iter().filter(|t| t.is_pending()) {
            if task.deadline >= first && task.deadline < first_of_next {
                due.entry(task.deadline).or_default().push(task);
            }
        }

        let mut cells: Vec<CalendarCell<'a>> =
            WEEKDAY_HEADERS.into_iter().map(CalendarCell::Header).collect();

        cells.extend(
            (days_in_prev_month - first_day_of_week + 1..=days_in_prev_month)
                .map(CalendarCell::PreviousMonth),
        );

        for date in first.iter_days().take(days_in_month as usize) {
            cells.push(CalendarCell::Day(CalendarDay {
                date,
                is_today: date == today,
                tasks: due.remove(&date).unwrap_or_default(),
            }));
        }

        let used = (first_day_of_week + days_in_month) as usize;
        let trailing = self.total_cells.saturating_sub(used).min(self.trailing_cap);
        let trailing = u32::try_from(trailing).unwrap_or(u32::MAX);
        cells.extend((1..=trailing).map(CalendarCell::NextMonth));

        Ok(CalendarGrid {
            cursor,
            first_day_of_week,
            days_in_month,
            days_in_prev_month,
            cells,
        })
    }
}
