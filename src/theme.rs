//! Dark Mode
//!
//! Persisted as '1' / '0' and applied as the `dark` class on `<body>`.

use crate::config::DARK_MODE_KEY;
use crate::storage::{KeyValueStore, StorageResult};

pub fn load_dark_mode<S: KeyValueStore>(storage: &S) -> bool {
    matches!(storage.get(DARK_MODE_KEY), Ok(Some(v)) if v == "1")
}

pub fn save_dark_mode<S: KeyValueStore>(storage: &S, on: bool) -> StorageResult<()> {
    storage.set(DARK_MODE_KEY, if on { "1" } else { "0" })
}

/// Toggle the body class
pub fn apply_dark_mode(on: bool) {
    let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
        return;
    };
    if let Err(e) = body.class_list().toggle_with_force("dark", on) {
        log::warn!("[THEME] could not toggle body class: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_dark_mode_round_trip() {
        let storage = MemoryStorage::new();
        assert!(!load_dark_mode(&storage));

        save_dark_mode(&storage, true).unwrap();
        assert_eq!(storage.get(DARK_MODE_KEY).unwrap().as_deref(), Some("1"));
        assert!(load_dark_mode(&storage));

        save_dark_mode(&storage, false).unwrap();
        assert_eq!(storage.get(DARK_MODE_KEY).unwrap().as_deref(), Some("0"));
        assert!(!load_dark_mode(&storage));
    }
}
