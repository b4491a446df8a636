//! Global Application State Store
//!
//! Uses Leptos reactive_stores for field-level reactivity.
//! Every mutation below saves what it changed before returning.

use reactive_stores::Store;

use crate::auth::{AuthResult, Session, UserDirectory};
use crate::config::HostConfig;
use crate::models::ANONYMOUS;
use crate::state::{ChecklistResult, ChecklistState};
use crate::storage::{KeyValueStore, StorageResult};
use crate::theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct AppState {
    /// Check state and comments of every item
    pub checklist: ChecklistState,
    /// Storage key of the checklist blob (`<prefix>state`)
    pub state_key: String,
    /// Known users, including persisted profile edits
    pub users: UserDirectory,
    /// Current login state
    pub session: Session,
    /// Free-text item filter
    pub search: String,
    pub dark_mode: bool,
}

impl AppState {
    /// Fresh state for a page without usable storage
    pub fn new(config: &HostConfig) -> Self {
        Self {
            checklist: ChecklistState::new(),
            state_key: config.state_key(),
            users: UserDirectory::new(config.users.clone()),
            session: Session::LoggedOut,
            search: String::new(),
            dark_mode: false,
        }
    }

    /// Everything persisted, read back from storage
    pub fn load<S: KeyValueStore>(storage: &S, config: &HostConfig) -> Self {
        let users = UserDirectory::load(storage, config.users.clone());
        let session = Session::restore(storage, &users);
        let state_key = config.state_key();
        Self {
            checklist: ChecklistState::load(storage, &state_key),
            state_key,
            session,
            users,
            search: String::new(),
            dark_mode: theme::load_dark_mode(storage),
        }
    }

    /// Display name of the logged in user, or the anonymous label
    pub fn current_user_name(&self) -> String {
        self.session
            .login_name()
            .and_then(|login| self.users.find(login))
            .map(|user| user.display_name.clone())
            .unwrap_or_else(|| ANONYMOUS.to_string())
    }

    // ========================
    // Checklist
    // ========================

    pub fn set_checked<S: KeyValueStore>(&mut self, storage: &S, key: &str, checked: bool) {
        self.checklist.set_checked(key, checked);
        self.save_checklist(storage);
    }

    pub fn add_comment<S: KeyValueStore>(&mut self, storage: &S, key: &str, text: &str) -> ChecklistResult<()> {
        let author = self.current_user_name();
        self.checklist.add_comment(key, &author, text)?;
        self.save_checklist(storage);
        Ok(())
    }

    pub fn add_reply<S: KeyValueStore>(&mut self, storage: &S, key: &str, index: usize, text: &str) -> ChecklistResult<()> {
        let author = self.current_user_name();
        self.checklist.add_reply(key, index, &author, text)?;
        self.save_checklist(storage);
        Ok(())
    }

    pub fn add_reaction<S: KeyValueStore>(&mut self, storage: &S, key: &str, index: usize, label: &str) -> ChecklistResult<u32> {
        let count = self.checklist.add_reaction(key, index, label)?;
        self.save_checklist(storage);
        Ok(count)
    }

    /// Clear every check and comment
    pub fn reset<S: KeyValueStore>(&mut self, storage: &S) {
        self.checklist.reset();
        self.save_checklist(storage);
    }

    fn save_checklist<S: KeyValueStore>(&self, storage: &S) {
        if let Err(e) = self.checklist.save(storage, &self.state_key) {
            log::error!("[STORE] failed to save {}: {}", self.state_key, e);
        }
    }

    // ========================
    // Session & profile
    // ========================

    pub fn login<S: KeyValueStore>(&mut self, storage: &S, login: &str, password: &str) -> AuthResult<()> {
        self.session = Session::login(storage, &self.users, login, password)?;
        Ok(())
    }

    pub fn logout<S: KeyValueStore>(&mut self, storage: &S) -> StorageResult<()> {
        self.session = Session::logout(storage)?;
        Ok(())
    }

    /// Edit the logged in user's profile and save the user list
    pub fn update_profile<S: KeyValueStore>(
        &mut self,
        storage: &S,
        display_name: &str,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<()> {
        let login = self.session.login_name().unwrap_or_default().to_string();
        self.users.update_profile(&login, display_name, current_password, new_password)?;
        self.users.save(storage)?;
        Ok(())
    }

    // ========================
    // Theme
    // ========================

    /// Flip dark mode and save it. Returns the new value.
    pub fn toggle_dark_mode<S: KeyValueStore>(&mut self, storage: &S) -> bool {
        self.dark_mode = !self.dark_mode;
        if let Err(e) = theme::save_dark_mode(storage, self.dark_mode) {
            log::error!("[STORE] failed to save dark mode: {}", e);
        }
        self.dark_mode
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;
