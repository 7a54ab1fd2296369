use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Config filename, looked up in the data directory
pub const CONFIG_FILE: &str = "todo.toml";

/// Error type for config reads
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse todo.toml: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Read `todo.toml` from the data directory. A missing file yields defaults;
/// a malformed one is an error (unlike the task blob, config is hand-written).
pub fn read_config(data_dir: &Path) -> Result<Config, ConfigError> {
    let path = data_dir.join(CONFIG_FILE);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Config::default()),
        Err(e) => return Err(ConfigError::ReadError { path, source: e }),
    };
    Ok(toml::from_str(&text)?)
}
