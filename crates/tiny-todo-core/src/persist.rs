//! JSON persistence for [`TodoStore`].
//!
//! The on-disk document is a single pretty-printed object:
//!
//! ```text
//! {
//!   "next_id": 3,
//!   "items": [
//!     { "id": 1, "text": "task A", "done": true },
//!     { "id": 2, "text": "task B", "done": false }
//!   ]
//! }
//! ```
//!
//! Saves go through a sibling `*.tmp` file that is renamed over the target,
//! so a failed save leaves any previous file intact.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::error::TodoError;
use crate::model::item::TodoItem;
use crate::store::TodoStore;

#[derive(Serialize)]
struct DocumentRef<'a> {
    next_id: u64,
    items: &'a [TodoItem],
}

#[derive(Deserialize)]
struct Document {
    #[serde(default)]
    next_id: Option<u64>,
    #[serde(default)]
    items: Vec<TodoItem>,
}

impl TodoStore {
    /// Write the store to `path` as pretty-printed JSON.
    ///
    /// Missing parent directories are created.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Io`] if the directories, the temporary file, or
    /// the final rename cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), TodoError> {
        let path = path.as_ref();
        let tmp_path = tmp_path_for(path)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| TodoError::io(parent, e))?;
        }

        let body = serde_json::to_vec_pretty(&DocumentRef {
            next_id: self.next_id,
            items: &self.items,
        })
        .map_err(|e| TodoError::io(path, io::Error::other(e)))?;

        fs::write(&tmp_path, body).map_err(|e| TodoError::io(&tmp_path, e))?;
        if let Err(e) = fs::rename(&tmp_path, path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TodoError::io(path, e));
        }

        info!(path = %path.display(), items = self.items.len(), "saved todo list");
        Ok(())
    }

    /// Read a store from `path`.
    ///
    /// A missing file yields an empty store. When the document has no
    /// `next_id`, or one that does not exceed every item id, the counter is
    /// recomputed as `max(id) + 1`.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::Io`] if the file exists but cannot be read, and
    /// [`TodoError::Parse`] if it is not valid UTF-8 JSON, an item lacks `id`
    /// or `text`, two items share an id, or no id is left to hand out.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TodoError> {
        let path = path.as_ref();
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "todo file missing, starting empty");
                return Ok(Self::new());
            }
            Err(e) => return Err(TodoError::io(path, e)),
        };

        let doc: Document =
            serde_json::from_slice(&bytes).map_err(|e| TodoError::parse(path, e.to_string()))?;

        let mut seen = HashSet::with_capacity(doc.items.len());
        for item in &doc.items {
            if !seen.insert(item.id) {
                return Err(TodoError::parse(path, format!("duplicate id {}", item.id)));
            }
        }

        let floor = match doc.items.iter().map(|it| it.id).max() {
            Some(max) => max
                .checked_add(1)
                .ok_or_else(|| TodoError::parse(path, "id space exhausted"))?,
            None => 1,
        };
        let next_id = match doc.next_id {
            Some(u64::MAX) => return Err(TodoError::parse(path, "id space exhausted")),
            Some(stored) if stored >= floor => stored,
            Some(stored) => {
                warn!(path = %path.display(), stored, next_id = floor, "raising stale next_id");
                floor
            }
            None => floor,
        };

        info!(path = %path.display(), items = doc.items.len(), "loaded todo list");
        Ok(Self {
            items: doc.items,
            next_id,
        })
    }
}

fn tmp_path_for(path: &Path) -> Result<PathBuf, TodoError> {
    let Some(name) = path.file_name() else {
        return Err(TodoError::io(
            path,
            io::Error::new(io::ErrorKind::InvalidInput, "todo path has no file name"),
        ));
    };
    let mut tmp_name = name.to_os_string();
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}
