//! Checklist State
//!
//! Explicit container for per-item check state and comment threads.
//! Mutations only touch memory; callers persist with `save` afterwards.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Comment, ItemState, Reply};
use crate::storage::{KeyValueStore, StorageResult};

#[derive(Debug, Error, PartialEq)]
pub enum ChecklistError {
    #[error("text is empty")]
    EmptyText,
    #[error("no comment #{index} on {key}")]
    CommentNotFound { key: String, index: usize },
}

pub type ChecklistResult<T> = Result<T, ChecklistError>;

/// Item key -> item state
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChecklistState {
    items: HashMap<String, ItemState>,
}

impl ChecklistState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the state blob. Any failure yields an empty state.
    pub fn load<S: KeyValueStore>(storage: &S, key: &str) -> Self {
        match storage.get_json::<ChecklistState>(key) {
            Ok(Some(state)) => state,
            Ok(None) => Self::new(),
            Err(e) => {
                log::warn!("[STATE] discarding unreadable {}: {}", key, e);
                Self::new()
            }
        }
    }

    /// Overwrite the whole blob
    pub fn save<S: KeyValueStore>(&self, storage: &S, key: &str) -> StorageResult<()> {
        storage.set_json(key, self)
    }

    pub fn is_checked(&self, key: &str) -> bool {
        self.items.get(key).map(|s| s.checked).unwrap_or(false)
    }

    pub fn set_checked(&mut self, key: &str, checked: bool) {
        self.entry(key).checked = checked;
    }

    pub fn comments(&self, key: &str) -> &[Comment] {
        self.items.get(key).map(|s| s.comments.as_slice()).unwrap_or(&[])
    }

    pub fn add_comment(&mut self, key: &str, author: &str, text: &str) -> ChecklistResult<()> {
        let text = non_empty(text)?;
        self.entry(key).comments.push(Comment::new(author, text));
        Ok(())
    }

    pub fn add_reply(&mut self, key: &str, index: usize, author: &str, text: &str) -> ChecklistResult<()> {
        let text = non_empty(text)?;
        self.comment_mut(key, index)?.replies.push(Reply::new(author, text));
        Ok(())
    }

    /// Increment a reaction tally. Returns the new count.
    pub fn add_reaction(&mut self, key: &str, index: usize, label: &str) -> ChecklistResult<u32> {
        let comment = self.comment_mut(key, index)?;
        let count = comment.reactions.entry(label.to_string()).or_insert(0);
        *count += 1;
        Ok(*count)
    }

    /// Clear all checks and comments
    pub fn reset(&mut self) {
        self.items.clear();
    }

    pub fn checked_count(&self) -> usize {
        self.items.values().filter(|s| s.checked).count()
    }

    fn entry(&mut self, key: &str) -> &mut ItemState {
        self.items.entry(key.to_string()).or_default()
    }

    fn comment_mut(&mut self, key: &str, index: usize) -> ChecklistResult<&mut Comment> {
        self.items
            .get_mut(key)
            .and_then(|s| s.comments.get_mut(index))
            .ok_or_else(|| ChecklistError::CommentNotFound { key: key.to_string(), index })
    }
}

fn non_empty(text: &str) -> ChecklistResult<&str> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        Err(ChecklistError::EmptyText)
    } else {
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{item_key, ANONYMOUS};
    use crate::storage::MemoryStorage;

    const KEY: &str = "checklist_state";

    #[test]
    fn test_toggle_persists_last_value() {
        let storage = MemoryStorage::new();
        let mut state = ChecklistState::new();
        for checked in [true, false, true, true, false, true] {
            state.set_checked("Safety_Helmet", checked);
            state.save(&storage, KEY).unwrap();
        }

        let reloaded = ChecklistState::load(&storage, KEY);
        assert!(reloaded.is_checked("Safety_Helmet"));
    }

    #[test]
    fn test_check_restores_only_that_key() {
        let storage = MemoryStorage::new();
        let mut state = ChecklistState::new();
        state.set_checked(&item_key("Safety", "Helmet"), true);
        state.save(&storage, KEY).unwrap();

        let reloaded = ChecklistState::load(&storage, KEY);
        assert!(reloaded.is_checked("Safety_Helmet"));
        assert!(!reloaded.is_checked("Safety_Gloves"));
        assert_eq!(reloaded.checked_count(), 1);
    }

    #[test]
    fn test_corrupt_blob_resets_to_empty() {
        let storage = MemoryStorage::new();
        storage.set(KEY, "{{{ nope").unwrap();
        assert_eq!(ChecklistState::load(&storage, KEY), ChecklistState::new());

        storage.set(KEY, "null").unwrap();
        assert_eq!(ChecklistState::load(&storage, KEY), ChecklistState::new());
    }

    #[test]
    fn test_missing_blob_is_empty() {
        let storage = MemoryStorage::new();
        assert_eq!(ChecklistState::load(&storage, KEY), ChecklistState::new());
    }

    #[test]
    fn test_loads_existing_blob_shape() {
        let storage = MemoryStorage::new();
        storage
            .set(KEY, r#"{"Safety_Helmet":{"checked":true,"comments":[{"user":"Matheus","text":"ok","replies":[],"reactions":{}}]}}"#)
            .unwrap();
        let state = ChecklistState::load(&storage, KEY);
        assert!(state.is_checked("Safety_Helmet"));
        assert_eq!(state.comments("Safety_Helmet")[0].author(), "Matheus");
    }

    #[test]
    fn test_comment_appended_last_with_author() {
        let storage = MemoryStorage::new();
        let mut state = ChecklistState::new();
        state.add_comment("Safety_Helmet", "Sátina", "first").unwrap();
        state.add_comment("Safety_Helmet", "Matheus", "  second  ").unwrap();
        state.save(&storage, KEY).unwrap();

        let reloaded = ChecklistState::load(&storage, KEY);
        let comments = reloaded.comments("Safety_Helmet");
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[1].text, "second");
        assert_eq!(comments[1].author(), "Matheus");
        assert!(comments[1].replies.is_empty());
        assert!(comments[1].reactions.is_empty());
    }

    #[test]
    fn test_empty_comment_is_noop() {
        let mut state = ChecklistState::new();
        assert_eq!(state.add_comment("k", ANONYMOUS, "   \n\t"), Err(ChecklistError::EmptyText));
        assert_eq!(state.add_comment("k", ANONYMOUS, ""), Err(ChecklistError::EmptyText));
        assert!(state.comments("k").is_empty());
        assert_eq!(state, ChecklistState::new());
    }

    #[test]
    fn test_reply_appends_and_rejects_empty() {
        let mut state = ChecklistState::new();
        state.add_comment("k", "Sátina", "question").unwrap();
        state.add_reply("k", 0, "Matheus", "answer").unwrap();
        assert_eq!(state.add_reply("k", 0, "Matheus", "  "), Err(ChecklistError::EmptyText));

        let replies = &state.comments("k")[0].replies;
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0].author(), "Matheus");
        assert_eq!(replies[0].text, "answer");
    }

    #[test]
    fn test_reply_to_missing_comment() {
        let mut state = ChecklistState::new();
        let err = state.add_reply("k", 3, "x", "hello").unwrap_err();
        assert_eq!(err, ChecklistError::CommentNotFound { key: "k".to_string(), index: 3 });
    }

    #[test]
    fn test_reaction_count_equals_clicks() {
        let mut state = ChecklistState::new();
        state.add_comment("k", "Sátina", "nice").unwrap();
        for n in 1..=7 {
            assert_eq!(state.add_reaction("k", 0, "amei").unwrap(), n);
        }
        let comment = &state.comments("k")[0];
        assert_eq!(comment.reaction_count("amei"), 7);
        assert_eq!(comment.reaction_count("curtir"), 0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut state = ChecklistState::new();
        state.set_checked("a", true);
        state.add_comment("b", "x", "y").unwrap();
        state.reset();
        assert_eq!(state, ChecklistState::new());
    }
}
