use serde::Serialize;

use crate::model::filter::FilterMode;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub id: i64,
    pub text: String,
    pub completed: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub filter: FilterMode,
    pub tasks: Vec<TaskJson>,
}

/// Result of `add` (no id when the text trimmed to nothing)
#[derive(Serialize)]
pub struct AddJson {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub added: bool,
}

/// Result of `toggle`/`delete` (`matched` is false for an unknown id)
#[derive(Serialize)]
pub struct MutationJson {
    pub id: i64,
    pub matched: bool,
}

// ---------------------------------------------------------------------------
// Conversions and text rendering
// ---------------------------------------------------------------------------

pub fn task_to_json(task: &Task) -> TaskJson {
    TaskJson {
        id: task.id,
        text: task.text.clone(),
        completed: task.completed,
    }
}

/// One text row per task: `[x] <id>  <text>`
pub fn task_row(task: &Task) -> String {
    let mark = if task.completed { 'x' } else { ' ' };
    format!("[{}] {}  {}", mark, task.id, task.text)
}
