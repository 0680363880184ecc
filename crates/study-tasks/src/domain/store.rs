//! Task store: the owned task list and its persistence discipline.

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::entities::{Task, TaskDraft};
use crate::errors::{TasksError, TasksResult};
use crate::storage::BlobStore;

/// Owns the in-memory task list and mirrors it to a blob store.
///
/// Every mutation writes the complete list as one blob before returning.
/// Changes are staged on a copy, so a failed write leaves the store as it was.
#[derive(Debug)]
pub struct TaskStore<S> {
    backend: S,
    key: String,
    tasks: Vec<Task>,
}

impl<S: BlobStore> TaskStore<S> {
    /// Open a store over `backend`, loading whatever is persisted under `key`
    pub fn open(backend: S, key: impl Into<String>) -> Self {
        let mut store = Self {
            backend,
            key: key.into(),
            tasks: Vec::new(),
        };
        store.load();
        store
    }

    /// Reload the task list from the blob store.
    ///
    /// An absent, unreadable or corrupt blob yields an empty list.
    pub fn load(&mut self) -> &[Task] {
        self.tasks = self.read_blob();
        &self.tasks
    }

    fn read_blob(&self) -> Vec<Task> {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                debug!(key = %self.key, "No persisted tasks, starting empty");
                return Vec::new();
            }
            Err(e) => {
                warn!(key = %self.key, error = %e, "Failed to read persisted tasks");
                return Vec::new();
            }
        };

        let records = match serde_json::from_str::<Vec<serde_json::Value>>(&raw) {
            Ok(records) => records,
            Err(e) => {
                warn!(key = %self.key, error = %e, "Persisted tasks are corrupt, starting empty");
                return Vec::new();
            }
        };

        // A bad record is skipped on its own so the rest of the list survives.
        let total = records.len();
        let tasks: Vec<Task> = records
            .into_iter()
            .enumerate()
            .filter_map(|(idx, record)| match serde_json::from_value::<Task>(record) {
                Ok(task) => Some(task),
                Err(e) => {
                    warn!(key = %self.key, index = idx, error = %e, "Skipping unreadable task record");
                    None
                }
            })
            .collect();

        debug!(
            key = %self.key,
            backend = self.backend.storage_type(),
            count = tasks.len(),
            skipped = total - tasks.len(),
            "Loaded tasks"
        );
        tasks
    }

    /// Current snapshot of all tasks, in insertion order
    pub fn all(&self) -> &[Task] {
        &self.tasks
    }

    /// Find a task by ID
    pub fn get(&self, id: u64) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The underlying blob store
    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Add a task created now
    pub fn add(&mut self, draft: TaskDraft) -> TasksResult<Task> {
        self.add_at(draft, Utc::now())
    }

    /// Add a task with an explicit creation time
    pub fn add_at(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> TasksResult<Task> {
        let id = self.next_id(now)?;
        let task = draft.into_task(id, now)?;

        let mut next = self.tasks.clone();
        next.push(task.clone());
        self.commit(next)?;

        info!(id = task.id, title = %task.title, "Added task");
        Ok(task)
    }

    /// Flip the completion flag of a task
    pub fn toggle_complete(&mut self, id: u64) -> TasksResult<Task> {
        let idx = self.position(id)?;

        let mut next = self.tasks.clone();
        next[idx].toggle();
        let toggled = next[idx].clone();
        self.commit(next)?;

        info!(id, completed = toggled.completed, "Toggled task");
        Ok(toggled)
    }

    /// Remove a task, returning it
    pub fn delete(&mut self, id: u64) -> TasksResult<Task> {
        let idx = self.position(id)?;

        let mut next = self.tasks.clone();
        let removed = next.remove(idx);
        self.commit(next)?;

        info!(id, "Deleted task");
        Ok(removed)
    }

    fn position(&self, id: u64) -> TasksResult<usize> {
        self.tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(TasksError::TaskNotFound { id })
    }

    // Millisecond timestamp, bumped past the newest id if the clock collides.
    fn next_id(&self, now: DateTime<Utc>) -> TasksResult<u64> {
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match self.tasks.iter().map(|t| t.id).max() {
            Some(last) if last >= candidate => {
                last.checked_add(1).ok_or_else(|| TasksError::StorageError {
                    reason: format!("task id space exhausted after {last}"),
                })
            }
            _ => Ok(candidate),
        }
    }

    fn commit(&mut self, next: Vec<Task>) -> TasksResult<()> {
        let blob = serde_json::to_string(&next)?;
        self.backend.set(&self.key, &blob)?;
        debug!(
            key = %self.key,
            backend = self.backend.storage_type(),
            count = next.len(),
            "Persisted tasks"
        );
        self.tasks = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Difficulty, TaskPriority};
    use crate::storage::MemoryBlobStore;
    use chrono::{NaiveDate, TimeZone};

    fn draft(title: &str) -> TaskDraft {
        TaskDraft::new(title, "Math")
            .priority(TaskPriority::High)
            .deadline(NaiveDate::from_ymd_opt(2024, 1, 12).unwrap())
            .difficulty(Difficulty::Medium)
    }

    fn setup() -> TaskStore<MemoryBlobStore> {
        TaskStore::open(MemoryBlobStore::new(), "tasks")
    }

    /// Serves a fixed blob and rejects every write
    struct ReadOnlyBlobStore {
        blob: Option<String>,
    }

    impl BlobStore for ReadOnlyBlobStore {
        fn get(&self, _key: &str) -> TasksResult<Option<String>> {
            Ok(self.blob.clone())
        }

        fn set(&mut self, _key: &str, _value: &str) -> TasksResult<()> {
            Err(TasksError::StorageError {
                reason: "disk full".to_string(),
            })
        }

        fn storage_type(&self) -> &'static str {
            "read-only"
        }
    }

    fn task_json(id: u64, difficulty: &str) -> String {
        format!(
            r#"{{"id":{id},"title":"Task {id}","subject":"Math","priority":"low","deadline":"2024-01-20","difficulty":"{difficulty}","estimatedTime":null,"notes":"","completed":false,"createdAt":"2024-01-10T00:00:00.000Z"}}"#
        )
    }

    #[test]
    fn test_add_assigns_id_and_persists_once() {
        let mut store = setup();
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();

        let task = store.add_at(draft("Problem set 3"), now).unwrap();

        assert_eq!(task.id, 1_704_877_200_000);
        assert_eq!(task.created_at, now);
        assert!(!task.completed);
        assert_eq!(store.all(), &[task]);
        assert_eq!(store.backend().writes(), 1);
    }

    #[test]
    fn test_same_millisecond_adds_get_distinct_ids() {
        let mut store = setup();
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 9, 0, 0).unwrap();

        let first = store.add_at(draft("A"), now).unwrap();
        let second = store.add_at(draft("B"), now).unwrap();

        assert_eq!(second.id, first.id + 1);
    }

    #[test]
    fn test_invalid_draft_is_not_persisted() {
        let mut store = setup();

        let err = store.add(TaskDraft::new("", "Math")).unwrap_err();

        assert_eq!(err, TasksError::MissingField { field: "title" });
        assert!(store.is_empty());
        assert_eq!(store.backend().writes(), 0);
    }

    #[test]
    fn test_toggle_twice_restores_task() {
        let mut store = setup();
        let original = store.add(draft("Lab report")).unwrap();

        let toggled = store.toggle_complete(original.id).unwrap();
        assert!(toggled.completed);

        let restored = store.toggle_complete(original.id).unwrap();
        assert_eq!(restored, original);
        assert_eq!(store.backend().writes(), 3);
    }

    #[test]
    fn test_delete_then_not_found() {
        let mut store = setup();
        let task = store.add(draft("Flashcards")).unwrap();

        store.delete(task.id).unwrap();
        assert!(store.get(task.id).is_none());

        let err = store.delete(task.id).unwrap_err();
        assert_eq!(err, TasksError::TaskNotFound { id: task.id });
        assert_eq!(store.backend().writes(), 2);
    }

    #[test]
    fn test_toggle_unknown_id_leaves_state() {
        let mut store = setup();
        store.add(draft("Reading")).unwrap();

        assert!(matches!(
            store.toggle_complete(7),
            Err(TasksError::TaskNotFound { id: 7 })
        ));
        assert_eq!(store.backend().writes(), 1);
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let backend = MemoryBlobStore::with_blob("tasks", "{not json");
        let store = TaskStore::open(backend, "tasks");
        assert!(store.is_empty());
    }

    #[test]
    fn test_reopen_sees_persisted_tasks() {
        let mut store = setup();
        let task = store.add(draft("Revise notes")).unwrap();

        let backend = store.backend().clone();
        let reopened = TaskStore::open(backend, "tasks");

        assert_eq!(reopened.all(), &[task]);
    }

    #[test]
    fn test_mixed_case_labels_load() {
        let blob = format!("[{},{}]", task_json(1, "easy"), task_json(2, "Easy"));
        let store = TaskStore::open(MemoryBlobStore::with_blob("tasks", blob), "tasks");

        assert_eq!(store.len(), 2);
        assert_eq!(store.get(2).unwrap().difficulty, Difficulty::Easy);
    }

    #[test]
    fn test_unreadable_record_skipped_alone() {
        let blob = format!(
            "[{},{},{}]",
            task_json(1, "easy"),
            task_json(2, "impossible"),
            task_json(3, "hard")
        );
        let store = TaskStore::open(MemoryBlobStore::with_blob("tasks", blob), "tasks");

        let ids: Vec<u64> = store.all().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_failed_persist_leaves_state_unchanged() {
        let blob = format!("[{}]", task_json(1, "medium"));
        let mut store = TaskStore::open(
            ReadOnlyBlobStore {
                blob: Some(blob),
            },
            "tasks",
        );
        let before = store.all().to_vec();

        assert!(matches!(
            store.add(draft("Extra")),
            Err(TasksError::StorageError { .. })
        ));
        assert!(matches!(
            store.toggle_complete(1),
            Err(TasksError::StorageError { .. })
        ));
        assert!(matches!(
            store.delete(1),
            Err(TasksError::StorageError { .. })
        ));

        assert_eq!(store.all(), before.as_slice());
        assert!(!store.get(1).unwrap().completed);
    }

    #[test]
    fn test_failed_persist_on_empty_store() {
        let mut store = TaskStore::open(ReadOnlyBlobStore { blob: None }, "tasks");

        assert!(store.add(draft("Extra")).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_exhausted_id_space_is_error() {
        let blob = format!("[{}]", task_json(u64::MAX, "easy"));
        let mut store = TaskStore::open(MemoryBlobStore::with_blob("tasks", blob), "tasks");
        assert_eq!(store.len(), 1);

        let err = store.add(draft("Overflow")).unwrap_err();

        assert!(matches!(err, TasksError::StorageError { .. }));
        assert_eq!(store.len(), 1);
        assert_eq!(store.backend().writes(), 0);
    }
}
