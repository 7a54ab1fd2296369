use serde::{Deserialize, Serialize};

/// A single to-do item.
///
/// The persisted form is exactly `{"id": ..., "text": ..., "completed": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique id, derived from the creation time in milliseconds
    pub id: i64,
    /// Task text (non-empty after trimming, enforced at creation)
    pub text: String,
    /// Whether the task is done
    pub completed: bool,
}

impl Task {
    /// Create a new, not-yet-completed task
    pub fn new(id: i64, text: String) -> Self {
        Task {
            id,
            text,
            completed: false,
        }
    }
}
