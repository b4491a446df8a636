//! Application Context
//!
//! Shared store and host config provided via Leptos Context API.
//! Hands the browser's local storage to the `AppState` mutations.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth::AuthResult;
use crate::config::HostConfig;
use crate::models::{Category, Comment};
use crate::state::{ChecklistError, ChecklistResult};
use crate::storage::LocalStorage;
use crate::store::{AppState, AppStateStoreFields, AppStore};
use crate::theme;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    config: StoredValue<HostConfig>,
}

impl AppContext {
    /// Build the store from local storage (or defaults when it is unavailable)
    pub fn init(config: HostConfig) -> Self {
        let state = match LocalStorage::open() {
            Ok(storage) => AppState::load(&storage, &config),
            Err(e) => {
                log::error!("[APP] local storage unavailable, nothing will persist: {}", e);
                AppState::new(&config)
            }
        };
        theme::apply_dark_mode(state.dark_mode);
        log::info!(
            "[APP] {} categories, {} items checked, logged in: {}",
            config.categories.len(),
            state.checklist.checked_count(),
            state.session.is_logged_in()
        );
        Self {
            store: Store::new(state),
            config: StoredValue::new(config),
        }
    }

    pub fn categories(&self) -> Vec<Category> {
        self.config.with_value(|c| c.categories.clone())
    }

    /// Run a mutation against the store with local storage.
    /// `None` when storage cannot be opened; the state is left as is.
    fn update<T>(&self, f: impl FnOnce(&mut AppState, &LocalStorage) -> T) -> Option<T> {
        match LocalStorage::open() {
            Ok(storage) => self.store.try_update(|state| f(state, &storage)),
            Err(e) => {
                log::error!("[APP] local storage unavailable: {}", e);
                None
            }
        }
    }

    // ========================
    // Session
    // ========================

    pub fn is_logged_in(&self) -> bool {
        self.store.session().with(|s| s.is_logged_in())
    }

    pub fn current_user_name(&self) -> String {
        self.store.with(|state| state.current_user_name())
    }

    pub fn login(&self, login: &str, password: &str) -> AuthResult<()> {
        let storage = LocalStorage::open()?;
        self.store.try_update(|state| state.login(&storage, login, password)).unwrap_or(Ok(()))
    }

    /// Drop the session token and reload the page
    pub fn logout(&self) {
        if let Some(Err(e)) = self.update(|state, storage| state.logout(storage)) {
            log::error!("[APP] failed to drop session: {}", e);
        }
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                log::error!("[APP] reload failed: {:?}", e);
            }
        }
    }

    pub fn update_profile(&self, display_name: &str, current_password: &str, new_password: &str) -> AuthResult<()> {
        let storage = LocalStorage::open()?;
        self.store
            .try_update(|state| state.update_profile(&storage, display_name, current_password, new_password))
            .unwrap_or(Ok(()))
    }

    // ========================
    // Checklist
    // ========================

    pub fn is_checked(&self, key: &str) -> bool {
        self.store.checklist().with(|s| s.is_checked(key))
    }

    pub fn comments(&self, key: &str) -> Vec<Comment> {
        self.store.checklist().with(|s| s.comments(key).to_vec())
    }

    pub fn set_checked(&self, key: &str, checked: bool) {
        self.update(|state, storage| state.set_checked(storage, key, checked));
    }

    pub fn add_comment(&self, key: &str, text: &str) -> ChecklistResult<()> {
        let result = self.update(|state, storage| state.add_comment(storage, key, text));
        log_rejected(result.unwrap_or(Ok(())))
    }

    pub fn add_reply(&self, key: &str, index: usize, text: &str) -> ChecklistResult<()> {
        let result = self.update(|state, storage| state.add_reply(storage, key, index, text));
        log_rejected(result.unwrap_or(Ok(())))
    }

    /// One click, one increment
    pub fn add_reaction(&self, key: &str, index: usize, label: &str) {
        if let Some(Err(e)) = self.update(|state, storage| state.add_reaction(storage, key, index, label)) {
            log::warn!("[APP] {}", e);
        }
    }

    /// Clear every check and comment
    pub fn reset(&self) {
        self.update(|state, storage| state.reset(storage));
    }

    // ========================
    // Search & theme
    // ========================

    pub fn search(&self) -> String {
        self.store.search().get()
    }

    pub fn set_search(&self, term: String) {
        self.store.search().set(term);
    }

    pub fn dark_mode(&self) -> bool {
        self.store.dark_mode().get()
    }

    pub fn toggle_dark_mode(&self) {
        if let Some(on) = self.update(|state, storage| state.toggle_dark_mode(storage)) {
            theme::apply_dark_mode(on);
        }
    }
}

/// Blank text is an expected no-op; anything else is worth a warning
fn log_rejected(result: ChecklistResult<()>) -> ChecklistResult<()> {
    if let Err(e) = &result {
        if *e != ChecklistError::EmptyText {
            log::warn!("[APP] {}", e);
        }
    }
    result
}

/// Get the app context
pub fn use_app() -> AppContext {
    expect_context::<AppContext>()
}
