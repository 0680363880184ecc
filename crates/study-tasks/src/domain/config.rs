//! Configuration domain facade.

use std::fs;
use std::path::{Path, PathBuf};

use crate::entities::{TrackerConfig, ViewConfig};
use crate::errors::{TasksError, TasksResult};

/// Loads and saves `config.json` in the data directory
pub struct ConfigDomain {
    config_path: PathBuf,
}

impl ConfigDomain {
    /// Create a new config domain
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            config_path: data_dir.as_ref().join("config.json"),
        }
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// Load configuration, falling back to defaults when none is saved
    pub fn load(&self) -> TasksResult<TrackerConfig> {
        match fs::read_to_string(&self.config_path) {
            Ok(content) => {
                let config: TrackerConfig = serde_json::from_str(&content)?;
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TrackerConfig::default()),
            Err(e) => Err(TasksError::FileReadError {
                path: self.config_path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    /// Save configuration
    pub fn save(&self, config: &TrackerConfig) -> TasksResult<()> {
        // Ensure directory exists
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(config)?;
        fs::write(&self.config_path, content).map_err(|e| TasksError::FileWriteError {
            path: self.config_path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Get view settings
    pub fn get_views(&self) -> TasksResult<ViewConfig> {
        Ok(self.load()?.views)
    }

    /// Set the blob key tasks are stored under
    pub fn set_storage_key(&self, key: impl Into<String>) -> TasksResult<()> {
        let key = key.into();
        if key.trim().is_empty() {
            return Err(TasksError::ConfigError {
                reason: "storage key must not be empty".to_string(),
            });
        }

        let mut config = self.load()?;
        config.storage_key = key;
        self.save(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_default_config() {
        let temp_dir = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp_dir.path());

        let config = domain.load().unwrap();
        assert_eq!(config, TrackerConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp_dir.path().join("data"));

        let mut config = TrackerConfig::default();
        config.views.dashboard_limit = 8;
        domain.save(&config).unwrap();

        assert_eq!(domain.get_views().unwrap().dashboard_limit, 8);
    }

    #[test]
    fn test_set_storage_key() {
        let temp_dir = TempDir::new().unwrap();
        let domain = ConfigDomain::new(temp_dir.path());

        domain.set_storage_key("semester-2").unwrap();
        assert_eq!(domain.load().unwrap().storage_key, "semester-2");

        assert!(matches!(
            domain.set_storage_key(" "),
            Err(TasksError::ConfigError { .. })
        ));
    }

    #[test]
    fn test_malformed_config_is_error() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join("config.json"), "{").unwrap();

        let err = ConfigDomain::new(temp_dir.path()).load().unwrap_err();
        assert!(matches!(err, TasksError::JsonParseError { .. }));
    }
}
