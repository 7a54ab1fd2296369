use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::model::task::Task;

/// Which tasks a listing shows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterMode {
    #[default]
    All,
    Completed,
    Incomplete,
}

impl FilterMode {
    /// The name used on the command line and in config
    pub fn as_str(self) -> &'static str {
        match self {
            FilterMode::All => "all",
            FilterMode::Completed => "completed",
            FilterMode::Incomplete => "incomplete",
        }
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(FilterMode::All),
            "completed" => Ok(FilterMode::Completed),
            "incomplete" => Ok(FilterMode::Incomplete),
            other => Err(format!(
                "unknown filter '{}' (expected all, completed, incomplete)",
                other
            )),
        }
    }
}

/// The subset of `tasks` visible under `mode`, in their original order.
pub fn visible(tasks: &[Task], mode: FilterMode) -> Vec<Task> {
    tasks
        .iter()
        .filter(|t| match mode {
            FilterMode::All => true,
            FilterMode::Completed => t.completed,
            FilterMode::Incomplete => !t.completed,
        })
        .cloned()
        .collect()
}
