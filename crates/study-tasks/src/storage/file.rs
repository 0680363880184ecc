//! File-based blob store.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::traits::BlobStore;
use crate::errors::{TasksError, TasksResult};

/// Stores each blob as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBlobStore {
    /// Directory holding the blob files
    data_dir: PathBuf,
}

impl FileBlobStore {
    /// Create a new file blob store rooted at `data_dir`
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    /// Get the data directory path
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    /// Path of the file backing `key`
    pub fn blob_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl BlobStore for FileBlobStore {
    fn get(&self, key: &str) -> TasksResult<Option<String>> {
        let path = self.blob_path(key);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(TasksError::FileReadError {
                path: path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> TasksResult<()> {
        fs::create_dir_all(&self.data_dir)?;

        let path = self.blob_path(key);
        let write_err = |reason: String| TasksError::FileWriteError {
            path: path.display().to_string(),
            reason,
        };

        // Write beside the target, then rename over it in one step.
        let mut staged =
            NamedTempFile::new_in(&self.data_dir).map_err(|e| write_err(e.to_string()))?;
        staged
            .write_all(value.as_bytes())
            .and_then(|()| staged.as_file().sync_all())
            .map_err(|e| write_err(e.to_string()))?;
        staged
            .persist(&path)
            .map_err(|e| write_err(e.error.to_string()))?;

        Ok(())
    }

    fn storage_type(&self) -> &'static str {
        "file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_blob_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileBlobStore::new(temp_dir.path());
        assert_eq!(store.get("tasks").unwrap(), None);
        assert_eq!(store.storage_type(), "file");
    }

    #[test]
    fn test_set_creates_dir_and_file() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileBlobStore::new(temp_dir.path().join("nested"));

        store.set("tasks", "[]").unwrap();

        assert!(temp_dir.path().join("nested/tasks.json").exists());
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_set_replaces_whole_blob() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileBlobStore::new(temp_dir.path());

        store.set("tasks", "[1,2,3]").unwrap();
        store.set("tasks", "[]").unwrap();

        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
        let leftovers = fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(leftovers, 1);
    }
}
