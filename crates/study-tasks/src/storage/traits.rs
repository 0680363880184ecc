//! Storage trait definitions.

use crate::errors::TasksResult;

/// Key-value store holding serialized blobs.
///
/// Calls are synchronous; a `set` replaces the whole value for its key.
pub trait BlobStore {
    /// Read the blob stored under `key`, if any
    fn get(&self, key: &str) -> TasksResult<Option<String>>;

    /// Replace the blob stored under `key`
    fn set(&mut self, key: &str, value: &str) -> TasksResult<()>;

    /// Get storage type identifier
    fn storage_type(&self) -> &'static str;
}
