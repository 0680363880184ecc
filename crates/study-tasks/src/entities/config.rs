//! Configuration entities.

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Blob key the task list is persisted under
    #[serde(default = "default_storage_key", rename = "storageKey")]
    pub storage_key: String,

    /// Settings for the derived views
    #[serde(default)]
    pub views: ViewConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            views: ViewConfig::default(),
        }
    }
}

/// Tunables for the dashboard, calendar and progress views
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Pending tasks due within this many days count as urgent
    #[serde(default = "default_urgent_window", rename = "urgentWindowDays")]
    pub urgent_window_days: i64,

    /// Number of pending tasks listed on the dashboard
    #[serde(default = "default_list_limit", rename = "dashboardLimit")]
    pub dashboard_limit: usize,

    /// Number of entries in the activity timeline
    #[serde(default = "default_list_limit", rename = "activityLimit")]
    pub activity_limit: usize,

    /// Day cells in a rendered month grid, headers excluded
    #[serde(default = "default_calendar_cells", rename = "calendarCells")]
    pub calendar_cells: usize,

    /// Upper bound on next-month fill cells
    #[serde(default = "default_trailing_cap", rename = "trailingDaysCap")]
    pub trailing_days_cap: usize,
}

fn default_storage_key() -> String {
    "tasks".to_string()
}

const fn default_urgent_window() -> i64 {
    3
}

const fn default_list_limit() -> usize {
    5
}

const fn default_calendar_cells() -> usize {
    42
}

const fn default_trailing_cap() -> usize {
    14
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            urgent_window_days: default_urgent_window(),
            dashboard_limit: default_list_limit(),
            activity_limit: default_list_limit(),
            calendar_cells: default_calendar_cells(),
            trailing_days_cap: default_trailing_cap(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TrackerConfig::default();
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.views.urgent_window_days, 3);
        assert_eq!(config.views.calendar_cells, 42);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: TrackerConfig =
            serde_json::from_str(r#"{"views":{"dashboardLimit":10}}"#).unwrap();
        assert_eq!(config.storage_key, "tasks");
        assert_eq!(config.views.dashboard_limit, 10);
        assert_eq!(config.views.activity_limit, 5);
        assert_eq!(config.views.trailing_days_cap, 14);
    }
}
