use serde::{Deserialize, Serialize};
use std::fmt;

/// A single task record.
///
/// Items are created by [`crate::store::TodoStore::add`] and only ever
/// change by flipping `done` from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TodoItem {
    pub id: u64,
    pub text: String,
    #[serde(default)]
    pub done: bool,
}

impl TodoItem {
    pub(crate) const fn new(id: u64, text: String) -> Self {
        Self {
            id,
            text,
            done: false,
        }
    }

    /// Returns `true` while the item has not been completed.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !self.done
    }
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.done { 'x' } else { ' ' };
        write!(f, "[{mark}] {} {}", self.id, self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_item_is_open() {
        let item = TodoItem::new(1, "write tests".into());
        assert!(item.is_open());
        assert!(!item.done);
    }

    #[test]
    fn done_defaults_to_false_when_omitted() {
        let item: TodoItem =
            serde_json::from_str(r#"{"id": 4, "text": "wire CI"}"#).expect("parse item");
        assert_eq!(item, TodoItem::new(4, "wire CI".into()));
    }

    #[test]
    fn missing_text_is_rejected() {
        let err = serde_json::from_str::<TodoItem>(r#"{"id": 4}"#).expect_err("text required");
        assert!(err.to_string().contains("text"), "got {err}");
    }

    #[test]
    fn unknown_field_is_rejected() {
        let raw = r#"{"id": 1, "text": "a", "done": false, "priority": 3}"#;
        assert!(serde_json::from_str::<TodoItem>(raw).is_err());
    }

    #[test]
    fn display_shows_checkbox() {
        let mut item = TodoItem::new(2, "task B".into());
        assert_eq!(item.to_string(), "[ ] 2 task B");
        item.done = true;
        assert_eq!(item.to_string(), "[x] 2 task B");
    }
}
