//! Host Configuration
//!
//! The hosting page sets globals before the app boots:
//! `checklistData`, `checklistKeyPrefix` and optionally `checklistUsers`.

use serde::de::DeserializeOwned;
use wasm_bindgen::JsValue;

use crate::models::{Category, User};

pub const DEFAULT_KEY_PREFIX: &str = "checklist_";

/// Storage key for the dark mode flag ('0' / '1')
pub const DARK_MODE_KEY: &str = "darkmode";
/// Storage key for the persisted user list
pub const USERS_KEY: &str = "users";
/// Storage key for the session token
pub const SESSION_KEY: &str = "user_login";

/// Built-in accounts used when the host supplies none
pub fn default_users() -> Vec<User> {
    vec![
        User::new("satina", "satina123", "Sátina"),
        User::new("matheus", "matheus123", "Matheus"),
    ]
}

#[derive(Debug, Clone, PartialEq)]
pub struct HostConfig {
    pub key_prefix: String,
    pub categories: Vec<Category>,
    pub users: Vec<User>,
}

impl HostConfig {
    pub fn new(key_prefix: Option<String>, categories: Vec<Category>, users: Option<Vec<User>>) -> Self {
        Self {
            key_prefix: key_prefix.filter(|p| !p.is_empty()).unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_string()),
            categories,
            users: match users {
                Some(users) => {
                    if users.is_empty() {
                        log::warn!("[CONFIG] host supplied an empty user list, nobody can log in");
                    }
                    users
                }
                None => default_users(),
            },
        }
    }

    /// Read the globals from `window`. Missing or malformed globals fall back to defaults.
    pub fn from_window() -> Self {
        let key_prefix = read_global::<String>("checklistKeyPrefix");
        let categories = read_global::<Vec<Category>>("checklistData").unwrap_or_default();
        let users = read_global::<Vec<User>>("checklistUsers");
        log::info!("[CONFIG] {} categories from host page", categories.len());
        Self::new(key_prefix, categories, users)
    }

    /// Storage key of the item state blob
    pub fn state_key(&self) -> String {
        format!("{}state", self.key_prefix)
    }
}

fn read_global<T: DeserializeOwned>(name: &str) -> Option<T> {
    let window = web_sys::window()?;
    let value = js_sys::Reflect::get(&window, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        return None;
    }
    match serde_wasm_bindgen::from_value(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            log::warn!("[CONFIG] ignoring malformed global {}: {}", name, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_when_host_supplies_nothing() {
        let config = HostConfig::new(None, Vec::new(), None);
        assert_eq!(config.key_prefix, "checklist_");
        assert_eq!(config.state_key(), "checklist_state");
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].login, "satina");
    }

    #[test]
    fn test_host_values_override_defaults() {
        let users = vec![User::new("ana", "pw", "Ana")];
        let config = HostConfig::new(Some("obra_".to_string()), vec![Category::new("Safety", &["Helmet"])], Some(users.clone()));
        assert_eq!(config.state_key(), "obra_state");
        assert_eq!(config.users, users);
        assert_eq!(config.categories.len(), 1);
    }

    #[test]
    fn test_empty_prefix_falls_back() {
        let config = HostConfig::new(Some(String::new()), Vec::new(), None);
        assert_eq!(config.key_prefix, DEFAULT_KEY_PREFIX);
    }

    #[test]
    fn test_empty_host_user_list_is_kept() {
        let config = HostConfig::new(None, Vec::new(), Some(Vec::new()));
        assert!(config.users.is_empty());
    }
}
