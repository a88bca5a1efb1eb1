//! In-memory todo store.
//!
//! # Invariants
//!
//! - `next_id` is greater than every id ever assigned, so ids are never
//!   reused.
//! - Items keep insertion order.
//! - Item text is trimmed and non-empty for every item created by
//!   [`TodoStore::add`].
//! - `done` only moves from `false` to `true`.

use tracing::debug;

use crate::error::TodoError;
use crate::model::item::TodoItem;

/// Item counts by completion state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Summary {
    pub total: usize,
    pub open: usize,
    pub done: usize,
}

/// Ordered collection of todo items plus the next-id counter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoStore {
    pub(crate) items: Vec<TodoItem>,
    pub(crate) next_id: u64,
}

impl Default for TodoStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoStore {
    /// Create an empty store whose first id will be 1.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// Add a todo and return its id.
    ///
    /// # Errors
    ///
    /// Returns [`TodoError::InvalidArgument`] if `text` is empty after
    /// trimming, and [`TodoError::IdsExhausted`] if the counter cannot move
    /// past the id it would hand out. The store is left untouched in both
    /// cases.
    pub fn add(&mut self, text: &str) -> Result<u64, TodoError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(TodoError::InvalidArgument {
                reason: "todo text cannot be empty",
            });
        }

        let id = self.next_id;
        let next_id = id
            .checked_add(1)
            .ok_or(TodoError::IdsExhausted { next_id: id })?;
        self.items.push(TodoItem::new(id, text.to_owned()));
        self.next_id = next_id;
        debug!(id, "added todo");
        Ok(id)
    }

    /// Mark a todo as done.
    ///
    /// Returns `true` if the item changed, `false` if the id is unknown or
    /// the item was already done.
    pub fn complete(&mut self, id: u64) -> bool {
        let Some(item) = self.items.iter_mut().find(|it| it.id == id) else {
            debug!(id, "complete: no such todo");
            return false;
        };
        if item.done {
            return false;
        }
        item.done = true;
        debug!(id, "completed todo");
        true
    }

    /// Snapshot of all open items in insertion order.
    #[must_use]
    pub fn list_open(&self) -> Vec<TodoItem> {
        self.items.iter().filter(|it| it.is_open()).cloned().collect()
    }

    /// Snapshot of every item in insertion order.
    #[must_use]
    pub fn list_all(&self) -> Vec<TodoItem> {
        self.items.clone()
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|it| it.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// The id the next successful [`TodoStore::add`] will return.
    #[must_use]
    pub const fn next_id(&self) -> u64 {
        self.next_id
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        let open = self.items.iter().filter(|it| it.is_open()).count();
        Summary {
            total: self.items.len(),
            open,
            done: self.items.len() - open,
        }
    }
}
