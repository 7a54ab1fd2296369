use chrono::Utc;

use crate::io::storage::{Storage, StorageError};
use crate::model::task::Task;

/// Owner of the task list for a session.
///
/// All mutations go through here, and each one that changes the list
/// persists the full list before returning (mutate, then save). Consumers
/// hold a `TaskStore` by value; there is no ambient global list.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    storage: Storage,
}

impl TaskStore {
    /// Load the persisted list into a new store. An absent or unreadable
    /// blob starts the session with an empty list.
    pub fn load(storage: Storage) -> TaskStore {
        let tasks = storage.read_tasks();
        TaskStore { tasks, storage }
    }

    /// The current list, in insertion order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Append a new task and save.
    ///
    /// Whitespace-only text is a no-op returning `Ok(None)`; otherwise the
    /// trimmed text is stored and the assigned id returned.
    pub fn add(&mut self, text: &str) -> Result<Option<i64>, StorageError> {
        let text = text.trim();
        if text.is_empty() {
            return Ok(None);
        }
        let id = self.next_id();
        self.tasks.push(Task::new(id, text.to_string()));
        self.save()?;
        Ok(Some(id))
    }

    /// Flip the completed flag on the task with `id` and save.
    /// Returns whether a task matched; a miss is a no-op, not an error.
    pub fn toggle(&mut self, id: i64) -> Result<bool, StorageError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.completed = !task.completed;
        self.save()?;
        Ok(true)
    }

    /// Remove the task with `id` and save.
    /// Returns whether a task matched; a miss is a no-op, not an error.
    pub fn delete(&mut self, id: i64) -> Result<bool, StorageError> {
        let before = self.tasks.len();
        self.tasks.retain(|t| t.id != id);
        if self.tasks.len() == before {
            return Ok(false);
        }
        self.save()?;
        Ok(true)
    }

    /// Serialize the full list and overwrite the blob (last writer wins).
    fn save(&self) -> Result<(), StorageError> {
        self.storage.write_tasks(&self.tasks)
    }

    /// Ids start from the wall clock in milliseconds, bumped past the
    /// current maximum so same-tick additions (and clock steps backwards)
    /// still produce unique, strictly increasing ids.
    fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) if max >= now => max + 1,
            _ => now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn empty_store() -> (TempDir, TaskStore) {
        let dir = TempDir::new().unwrap();
        let store = TaskStore::load(Storage::new(dir.path()));
        (dir, store)
    }

    #[test]
    fn load_with_no_blob_is_empty() {
        let (_dir, store) = empty_store();
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn add_appends_an_incomplete_task() {
        let (_dir, mut store) = empty_store();
        let id = store.add("Buy milk").unwrap().unwrap();
        assert_eq!(store.tasks().len(), 1);
        let task = &store.tasks()[0];
        assert_eq!(task.id, id);
        assert_eq!(task.text, "Buy milk");
        assert!(!task.completed);
    }

    #[test]
    fn add_blank_text_is_a_no_op() {
        let (_dir, mut store) = empty_store();
        assert_eq!(store.add("").unwrap(), None);
        assert_eq!(store.add("   \t ").unwrap(), None);
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn add_trims_surrounding_whitespace() {
        let (_dir, mut store) = empty_store();
        store.add("  Buy milk  ").unwrap();
        assert_eq!(store.tasks()[0].text, "Buy milk");
    }

    #[test]
    fn add_appends_at_the_end() {
        let (_dir, mut store) = empty_store();
        store.add("a").unwrap();
        store.add("b").unwrap();
        store.add("c").unwrap();
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn ids_stay_unique_within_one_clock_tick() {
        let (_dir, mut store) = empty_store();
        let a = store.add("a").unwrap().unwrap();
        let b = store.add("b").unwrap().unwrap();
        let c = store.add("c").unwrap().unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn next_id_bumps_past_a_future_max() {
        // A persisted id from a fast clock must not be reused
        let (_dir, mut store) = empty_store();
        let future = Utc::now().timestamp_millis() + 60_000;
        store.tasks.push(Task::new(future, "from the future".into()));
        let id = store.add("present").unwrap().unwrap();
        assert_eq!(id, future + 1);
    }

    #[test]
    fn toggle_flips_exactly_one_task() {
        let (_dir, mut store) = empty_store();
        let a = store.add("a").unwrap().unwrap();
        let b = store.add("b").unwrap().unwrap();

        assert!(store.toggle(a).unwrap());
        assert!(store.tasks()[0].completed);
        assert!(!store.tasks()[1].completed);
        assert_eq!(store.tasks()[1].id, b);
    }

    #[test]
    fn toggle_twice_restores_the_original_flag() {
        let (_dir, mut store) = empty_store();
        let id = store.add("a").unwrap().unwrap();
        store.toggle(id).unwrap();
        store.toggle(id).unwrap();
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn toggle_missing_id_is_a_no_op() {
        let (_dir, mut store) = empty_store();
        store.add("a").unwrap();
        assert!(!store.toggle(999).unwrap());
        assert!(!store.tasks()[0].completed);
    }

    #[test]
    fn delete_removes_one_task_and_preserves_order() {
        let (_dir, mut store) = empty_store();
        store.add("a").unwrap();
        let b = store.add("b").unwrap().unwrap();
        store.add("c").unwrap();

        assert!(store.delete(b).unwrap());
        let texts: Vec<&str> = store.tasks().iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["a", "c"]);
    }

    #[test]
    fn delete_missing_id_is_a_no_op() {
        let (_dir, mut store) = empty_store();
        store.add("a").unwrap();
        assert!(!store.delete(999).unwrap());
        assert_eq!(store.tasks().len(), 1);
    }

    #[test]
    fn mutations_persist_across_loads() {
        let dir = TempDir::new().unwrap();
        let mut store = TaskStore::load(Storage::new(dir.path()));
        let a = store.add("A").unwrap().unwrap();
        let b = store.add("B").unwrap().unwrap();
        store.toggle(a).unwrap();
        store.delete(b).unwrap();

        let reloaded = TaskStore::load(Storage::new(dir.path()));
        assert_eq!(reloaded.tasks().len(), 1);
        assert_eq!(reloaded.tasks()[0].text, "A");
        assert!(reloaded.tasks()[0].completed);
    }

    #[test]
    fn blank_add_does_not_touch_the_blob() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        let mut store = TaskStore::load(storage.clone());
        store.add("   ").unwrap();
        assert!(!storage.path().exists());
    }

    #[test]
    fn load_ignores_a_corrupt_blob() {
        let dir = TempDir::new().unwrap();
        let storage = Storage::new(dir.path());
        std::fs::write(storage.path(), "][ garbage").unwrap();
        let store = TaskStore::load(storage);
        assert!(store.tasks().is_empty());
    }
}
