use std::fs;
use std::path::{Path, PathBuf};

use crate::model::task::Task;

/// Fixed key the task list is stored under; the blob lives at `<key>.json`
/// inside the data directory.
pub const STORAGE_KEY: &str = "tasks";

/// Error type for storage writes
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not serialize task list: {0}")]
    SerializeError(#[from] serde_json::Error),
}

/// The persistence boundary: the whole task list as one JSON blob.
#[derive(Debug, Clone)]
pub struct Storage {
    path: PathBuf,
}

impl Storage {
    pub fn new(data_dir: &Path) -> Storage {
        Storage {
            path: data_dir.join(format!("{}.json", STORAGE_KEY)),
        }
    }

    /// Location of the blob on disk
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the persisted task list.
    ///
    /// A missing or malformed blob yields an empty list. The blob is a
    /// best-effort cache; a bad read is never surfaced.
    pub fn read_tasks(&self) -> Vec<Task> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str(&content).unwrap_or_default()
    }

    /// Overwrite the blob with the full task list (last writer wins).
    pub fn write_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let content = serde_json::to_string_pretty(tasks)?;
        fs::write(&self.path, content).map_err(|e| StorageError::WriteError {
            path: self.path.clone(),
            source: e,
        })
    }
}
