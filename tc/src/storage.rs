//! Storage port and backends
//!
//! The persistence bridge is isolated behind the [`Storage`] trait
//! (`load`/`save` of the whole collection) so the transition logic has no
//! dependency on any particular storage mechanism. The slot layout is a
//! serialized array of task records with no schema version field; any
//! reader tolerates absence of the slot.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::{debug, warn};

use crate::list::TaskList;

/// Storage errors
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to serialize task list: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Persistence port for the task collection
///
/// `load` is called once at startup; `save` overwrites the full slot on
/// every state change. No partial writes, no versioning, no migration.
pub trait Storage {
    /// Read the slot. Absent or unparseable data yields an empty list.
    fn load(&self) -> Result<TaskList, StorageError>;

    /// Overwrite the slot with the full collection.
    fn save(&self, list: &TaskList) -> Result<(), StorageError>;
}

/// JSON-file slot storage
///
/// One file holds the whole collection. Saves go through a temp file in
/// the same directory followed by a rename, so a failed write never
/// truncates the previous slot contents.
#[derive(Debug)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Storage for JsonFileStorage {
    fn load(&self) -> Result<TaskList, StorageError> {
        debug!(path = %self.path.display(), "JsonFileStorage::load");
        if !self.path.exists() {
            debug!("JsonFileStorage::load: slot absent, starting empty");
            return Ok(TaskList::new());
        }
        let content = fs::read_to_string(&self.path)?;
        match serde_json::from_str(&content) {
            Ok(list) => Ok(list),
            Err(e) => {
                // Malformed slot: fall back to empty rather than fail.
                // The bad file is only overwritten on the next save.
                warn!(path = %self.path.display(), error = %e, "stored task data is unparseable, starting empty");
                Ok(TaskList::new())
            }
        }
    }

    fn save(&self, list: &TaskList) -> Result<(), StorageError> {
        debug!(path = %self.path.display(), count = list.len(), "JsonFileStorage::save");
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(list)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

/// In-memory slot storage for tests
///
/// Stores the serialized form, so it exercises the same round-trip as the
/// file backend without touching the filesystem.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    slot: Mutex<Option<String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<TaskList, StorageError> {
        let slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        match slot.as_deref() {
            Some(content) => match serde_json::from_str(content) {
                Ok(list) => Ok(list),
                Err(e) => {
                    warn!(error = %e, "in-memory slot is unparseable, starting empty");
                    Ok(TaskList::new())
                }
            },
            None => Ok(TaskList::new()),
        }
    }

    fn save(&self, list: &TaskList) -> Result<(), StorageError> {
        let content = serde_json::to_string(list)?;
        let mut slot = self.slot.lock().unwrap_or_else(|e| e.into_inner());
        *slot = Some(content);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::Action;
    use crate::task::Priority;
    use tempfile::tempdir;

    fn sample_list() -> TaskList {
        let mut list = TaskList::new();
        for (title, priority) in [("Write report", Priority::High), ("Email team", Priority::Low)] {
            list = list
                .apply(Action::Add {
                    title: title.to_string(),
                    priority,
                })
                .list;
        }
        list
    }

    #[test]
    fn test_missing_slot_loads_empty() {
        let temp = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp.path().join("tasks.json"));
        let list = storage.load().unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_file_roundtrip_preserves_everything() {
        let temp = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp.path().join("tasks.json"));

        let list = sample_list();
        storage.save(&list).unwrap();
        let loaded = storage.load().unwrap();

        // Same ids, fields, and order
        assert_eq!(loaded, list);
    }

    #[test]
    fn test_malformed_slot_loads_empty() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tasks.json");
        fs::write(&path, "{ not json ]").unwrap();

        let storage = JsonFileStorage::new(&path);
        let list = storage.load().unwrap();
        assert!(list.is_empty());

        // The bad file is untouched until the next save
        assert_eq!(fs::read_to_string(&path).unwrap(), "{ not json ]");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("nested").join("dir").join("tasks.json");
        let storage = JsonFileStorage::new(&path);
        storage.save(&sample_list()).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_save_overwrites_prior_contents() {
        let temp = tempdir().unwrap();
        let storage = JsonFileStorage::new(temp.path().join("tasks.json"));

        let list = sample_list();
        storage.save(&list).unwrap();

        let id = list.tasks()[0].id.clone();
        let smaller = list.apply(Action::Remove { id }).list;
        storage.save(&smaller).unwrap();

        assert_eq!(storage.load().unwrap(), smaller);
    }

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert!(storage.load().unwrap().is_empty());

        let list = sample_list();
        storage.save(&list).unwrap();
        assert_eq!(storage.load().unwrap(), list);
    }

    #[test]
    fn test_slot_layout_field_names() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("tasks.json");
        let storage = JsonFileStorage::new(&path);
        storage.save(&sample_list()).unwrap();

        let raw: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        let records = raw.as_array().unwrap();
        assert_eq!(records.len(), 2);
        for record in records {
            assert!(record["id"].is_string());
            assert!(record["title"].is_string());
            assert!(record["completed"].is_boolean());
            assert!(record["createdAt"].is_string());
        }
        assert_eq!(records[0]["priority"], "high");
        assert_eq!(records[1]["priority"], "low");
    }
}
