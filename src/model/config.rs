use serde::Deserialize;

use crate::model::filter::FilterMode;

/// Parsed `todo.toml` (all fields optional)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// Filter `list` applies when no `--filter` flag is given
    #[serde(default)]
    pub default_filter: Option<FilterMode>,
}
