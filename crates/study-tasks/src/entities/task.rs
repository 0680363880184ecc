//! Task entity and related types.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::TasksError;

/// Milliseconds in one day, the unit of deadline proximity
pub const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// Task priority levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for TaskPriority {
    type Err = TasksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TasksError::InvalidPriority {
                priority: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for TaskPriority {
    type Error = TasksError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// How hard a task is expected to be
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl std::str::FromStr for Difficulty {
    type Err = TasksError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" | "med" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(TasksError::InvalidDifficulty {
                difficulty: s.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Difficulty {
    type Error = TasksError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// A single study or work task.
///
/// Field names on the wire match the persisted records exactly, so existing
/// blobs load without migration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Creation time in milliseconds, unique within a store
    pub id: u64,

    pub title: String,

    /// Free-form category label
    pub subject: String,

    pub priority: TaskPriority,

    /// Calendar date the task is due
    pub deadline: NaiveDate,

    pub difficulty: Difficulty,

    /// Estimated effort in hours
    #[serde(
        default,
        rename = "estimatedTime",
        deserialize_with = "deserialize_estimated_time"
    )]
    pub estimated_time: Option<f64>,

    #[serde(default)]
    pub notes: String,

    #[serde(default)]
    pub completed: bool,

    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Whether the task still needs doing
    pub fn is_pending(&self) -> bool {
        !self.completed
    }

    /// Whole days from `now` until the deadline, rounded up
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        days_until(self.deadline, now)
    }

    /// Deadline proximity relative to `now`
    pub fn deadline_status(&self, now: DateTime<Utc>) -> DeadlineStatus {
        DeadlineStatus::from_days(self.days_until(now))
    }

    /// Flip the completion flag
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }
}

/// `ceil((deadline - now) / 1 day)` with the deadline taken as midnight UTC.
///
/// A deadline exactly at `now` yields 0, one 25 hours away yields 2.
pub fn days_until(deadline: NaiveDate, now: DateTime<Utc>) -> i64 {
    let due = deadline.and_time(NaiveTime::MIN).and_utc();
    let diff = (due - now).num_milliseconds();
    let whole = diff.div_euclid(MILLIS_PER_DAY);
    if diff.rem_euclid(MILLIS_PER_DAY) == 0 {
        whole
    } else {
        whole + 1
    }
}

/// Deadline proximity bucket used for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeadlineStatus {
    Overdue(u64),
    DueToday,
    DueTomorrow,
    DueIn(u64),
}

impl DeadlineStatus {
    pub fn from_days(days: i64) -> Self {
        match days {
            d if d < 0 => Self::Overdue(d.unsigned_abs()),
            0 => Self::DueToday,
            1 => Self::DueTomorrow,
            d => Self::DueIn(d.unsigned_abs()),
        }
    }
}

impl std::fmt::Display for DeadlineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Overdue(days) => write!(f, "Overdue by {days} day(s)"),
            Self::DueToday => write!(f, "Due today"),
            Self::DueTomorrow => write!(f, "Due tomorrow"),
            Self::DueIn(days) => write!(f, "Due in {days} days"),
        }
    }
}

// Older records stored the raw form input, so the estimate may be a string.
fn deserialize_estimated_time<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawEstimate {
        Number(f64),
        Text(String),
    }

    match Option::<RawEstimate>::deserialize(deserializer)? {
        None => Ok(None),
        Some(RawEstimate::Number(hours)) => Ok(Some(hours)),
        Some(RawEstimate::Text(text)) if text.trim().is_empty() => Ok(None),
        Some(RawEstimate::Text(text)) => text
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}
