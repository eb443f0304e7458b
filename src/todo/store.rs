//! Task persistence.
//!
//! The whole collection is written as a JSON array to a fixed file after
//! every mutation and read back verbatim at startup. Loading tolerates a
//! missing, unreadable, or malformed file by substituting an empty
//! collection and logging the failure; it never fails the caller.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::task::Task;

const TASKS_FILE: &str = "tasks.json";

pub fn default_tasks_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("deskpad")
        .join(TASKS_FILE)
}

#[derive(Debug, Clone)]
pub struct TaskStore {
    path: PathBuf,
}

impl TaskStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Vec<Task> {
        if !self.path.exists() {
            return Vec::new();
        }
        let contents = match std::fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read tasks file");
                return Vec::new();
            }
        };
        match serde_json::from_str::<Vec<Task>>(&contents) {
            Ok(tasks) => tasks,
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "tasks file did not parse, starting empty");
                Vec::new()
            }
        }
    }

    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {}", parent.display()))?;
        }
        let contents =
            serde_json::to_string_pretty(tasks).with_context(|| "Failed to serialize tasks")?;
        std::fs::write(&self.path, contents)
            .with_context(|| format!("Failed to write tasks to {}", self.path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::TaskList;

    fn store_in(dir: &tempfile::TempDir) -> TaskStore {
        TaskStore::new(dir.path().join(TASKS_FILE))
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let mut list = TaskList::default();
        let added = list.add("Buy milk", None).unwrap().clone();
        store.save(&list.tasks).unwrap();

        let loaded = store.load();
        assert_eq!(loaded, vec![added]);
        assert_eq!(loaded[0].title, "Buy milk");
        assert_eq!(loaded[0].due_date, None);
        assert!(!loaded[0].completed);
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(store_in(&dir).load().is_empty());
    }

    #[test]
    fn test_corrupt_file_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "{ not json").unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_non_array_value_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), r#"{"id":"1"}"#).unwrap();
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_creates_parent_directories() {
        let dir = tempfile::tempdir().unwrap();
        let store = TaskStore::new(dir.path().join("nested").join(TASKS_FILE));
        store.save(&[]).unwrap();
        assert_eq!(store.load(), Vec::new());
    }
}
