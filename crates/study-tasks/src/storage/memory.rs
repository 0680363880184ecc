//! In-memory blob store.

use std::collections::HashMap;

use super::traits::BlobStore;
use crate::errors::TasksResult;

/// Blob store that keeps everything in a map and counts writes
#[derive(Debug, Default, Clone)]
pub struct MemoryBlobStore {
    blobs: HashMap<String, String>,
    writes: usize,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a store with an existing blob
    pub fn with_blob(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut blobs = HashMap::new();
        blobs.insert(key.into(), value.into());
        Self { blobs, writes: 0 }
    }

    /// Number of `set` calls since creation
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> TasksResult<Option<String>> {
        Ok(self.blobs.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TasksResult<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }

    fn storage_type(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut store = MemoryBlobStore::new();
        assert_eq!(store.get("tasks").unwrap(), None);

        store.set("tasks", "[]").unwrap();
        assert_eq!(store.get("tasks").unwrap().as_deref(), Some("[]"));
        assert_eq!(store.writes(), 1);
    }

    #[test]
    fn test_seeded_store_has_no_writes() {
        let store = MemoryBlobStore::with_blob("tasks", "[]");
        assert_eq!(store.writes(), 0);
        assert!(store.get("tasks").unwrap().is_some());
        assert_eq!(store.storage_type(), "memory");
    }
}
