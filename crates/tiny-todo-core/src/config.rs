use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::store::TodoStore;

/// Directory under the project root that holds config and data.
pub const TODO_DIR: &str = ".todo";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TodoConfig {
    #[serde(default)]
    pub store: StoreConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Store file, relative to `.todo/` unless absolute.
    #[serde(default = "default_store_file")]
    pub file: PathBuf,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: default_store_file(),
        }
    }
}

fn default_store_file() -> PathBuf {
    PathBuf::from("todos.json")
}

impl TodoConfig {
    /// Resolve the store file against `project_root`.
    #[must_use]
    pub fn store_path(&self, project_root: &Path) -> PathBuf {
        if self.store.file.is_absolute() {
            self.store.file.clone()
        } else {
            project_root.join(TODO_DIR).join(&self.store.file)
        }
    }
}

/// Load `.todo/config.toml`, falling back to defaults when it is absent.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_config(project_root: &Path) -> Result<TodoConfig> {
    let path = project_root.join(TODO_DIR).join("config.toml");
    if !path.exists() {
        return Ok(TodoConfig::default());
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    toml::from_str::<TodoConfig>(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))
}

/// Load the configured store for `project_root`.
///
/// # Errors
///
/// Returns an error if the config is invalid or the store file cannot be
/// loaded.
pub fn open_store(project_root: &Path) -> Result<(TodoStore, PathBuf)> {
    let config = load_config(project_root)?;
    let path = config.store_path(project_root);
    let store = TodoStore::load(&path)
        .with_context(|| format!("Failed to open todo store at {}", path.display()))?;
    Ok((store, path))
}
