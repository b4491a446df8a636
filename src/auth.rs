//! Authentication
//!
//! User directory, credential check and the stored session token.

use thiserror::Error;

use crate::config::{SESSION_KEY, USERS_KEY};
use crate::models::User;
use crate::storage::{KeyValueStore, StorageError, StorageResult};

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Usuário ou senha inválidos")]
    InvalidCredentials,
    #[error("Senha atual incorreta")]
    WrongPassword,
    #[error("unknown user {0}")]
    UnknownUser(String),
    #[error(transparent)]
    Storage(#[from] StorageError),
}

pub type AuthResult<T> = Result<T, AuthError>;

/// Credential check
pub trait Authenticator {
    fn verify(&self, login: &str, password: &str) -> Option<User>;
}

/// Fixed-size list of known users
#[derive(Debug, Clone, PartialEq)]
pub struct UserDirectory {
    users: Vec<User>,
}

impl UserDirectory {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Base users with persisted profile edits applied by position
    pub fn load<S: KeyValueStore>(storage: &S, base: Vec<User>) -> Self {
        let mut directory = Self::new(base);
        match storage.get_json::<Vec<User>>(USERS_KEY) {
            Ok(Some(saved)) => directory.apply_overrides(&saved),
            Ok(None) => {}
            Err(e) => log::warn!("[AUTH] ignoring unreadable {}: {}", USERS_KEY, e),
        }
        directory
    }

    pub fn save<S: KeyValueStore>(&self, storage: &S) -> StorageResult<()> {
        storage.set_json(USERS_KEY, &self.users)
    }

    fn apply_overrides(&mut self, saved: &[User]) {
        for (user, saved) in self.users.iter_mut().zip(saved) {
            user.display_name = saved.display_name.clone();
            user.password = saved.password.clone();
        }
    }

    pub fn find(&self, login: &str) -> Option<&User> {
        self.users.iter().find(|u| u.login == login)
    }

    /// Change display name and optionally password after checking the current password
    pub fn update_profile(
        &mut self,
        login: &str,
        display_name: &str,
        current_password: &str,
        new_password: &str,
    ) -> AuthResult<()> {
        let user = self
            .users
            .iter_mut()
            .find(|u| u.login == login)
            .ok_or_else(|| AuthError::UnknownUser(login.to_string()))?;
        if current_password.trim() != user.password {
            return Err(AuthError::WrongPassword);
        }
        user.display_name = display_name.trim().to_string();
        let new_password = new_password.trim();
        if !new_password.is_empty() {
            user.password = new_password.to_string();
        }
        Ok(())
    }
}

impl Authenticator for UserDirectory {
    fn verify(&self, login: &str, password: &str) -> Option<User> {
        let login = login.trim().to_lowercase();
        let password = password.trim();
        self.users
            .iter()
            .find(|u| u.login.to_lowercase() == login && u.password == password)
            .cloned()
    }
}

/// Login state of the page
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Session {
    #[default]
    LoggedOut,
    LoggedIn(String),
}

impl Session {
    /// Restore from the stored token. Tokens naming no known user are ignored.
    pub fn restore<S: KeyValueStore>(storage: &S, directory: &UserDirectory) -> Self {
        match storage.get(SESSION_KEY) {
            Ok(Some(login)) if directory.find(&login).is_some() => Session::LoggedIn(login),
            Ok(_) => Session::LoggedOut,
            Err(e) => {
                log::warn!("[AUTH] session token unreadable: {}", e);
                Session::LoggedOut
            }
        }
    }

    /// Check credentials and store the token on success
    pub fn login<S: KeyValueStore, A: Authenticator>(
        storage: &S,
        auth: &A,
        login: &str,
        password: &str,
    ) -> AuthResult<Self> {
        let user = auth.verify(login, password).ok_or(AuthError::InvalidCredentials)?;
        storage.set(SESSION_KEY, &user.login)?;
        log::info!("[AUTH] {} logged in", user.login);
        Ok(Session::LoggedIn(user.login))
    }

    pub fn logout<S: KeyValueStore>(storage: &S) -> StorageResult<Self> {
        storage.remove(SESSION_KEY)?;
        Ok(Session::LoggedOut)
    }

    pub fn login_name(&self) -> Option<&str> {
        match self {
            Session::LoggedIn(login) => Some(login),
            Session::LoggedOut => None,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        matches!(self, Session::LoggedIn(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::default_users;
    use crate::storage::MemoryStorage;

    fn directory() -> UserDirectory {
        UserDirectory::new(default_users())
    }

    #[test]
    fn test_verify_login_case_insensitive_password_exact() {
        let dir = directory();
        assert_eq!(dir.verify(" Satina ", "satina123").map(|u| u.login), Some("satina".to_string()));
        assert!(dir.verify("satina", "SATINA123").is_none());
        assert!(dir.verify("nobody", "satina123").is_none());
    }

    #[test]
    fn test_invalid_login_stays_logged_out() {
        let storage = MemoryStorage::new();
        let result = Session::login(&storage, &directory(), "matheus", "wrong");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
        assert_eq!(Session::restore(&storage, &directory()), Session::LoggedOut);
    }

    #[test]
    fn test_valid_login_persists_token() {
        let storage = MemoryStorage::new();
        let session = Session::login(&storage, &directory(), "MATHEUS", "matheus123").unwrap();
        assert_eq!(session, Session::LoggedIn("matheus".to_string()));
        assert_eq!(storage.get(SESSION_KEY).unwrap().as_deref(), Some("matheus"));
        assert_eq!(Session::restore(&storage, &directory()), session);
    }

    #[test]
    fn test_unknown_token_is_logged_out() {
        let storage = MemoryStorage::new();
        storage.set(SESSION_KEY, "ghost").unwrap();
        assert_eq!(Session::restore(&storage, &directory()), Session::LoggedOut);
    }

    #[test]
    fn test_logout_removes_token() {
        let storage = MemoryStorage::new();
        Session::login(&storage, &directory(), "satina", "satina123").unwrap();
        assert_eq!(Session::logout(&storage).unwrap(), Session::LoggedOut);
        assert_eq!(storage.get(SESSION_KEY).unwrap(), None);
    }

    #[test]
    fn test_update_profile_wrong_password_leaves_user() {
        let mut dir = directory();
        let err = dir.update_profile("satina", "New", "nope", "x").unwrap_err();
        assert!(matches!(err, AuthError::WrongPassword));
        assert_eq!(dir.find("satina").unwrap(), &default_users()[0]);
    }

    #[test]
    fn test_update_profile_keeps_password_when_blank() {
        let mut dir = directory();
        dir.update_profile("satina", " Sá ", "satina123", "  ").unwrap();
        let user = dir.find("satina").unwrap();
        assert_eq!(user.display_name, "Sá");
        assert_eq!(user.password, "satina123");
    }

    #[test]
    fn test_profile_edit_survives_reload() {
        let storage = MemoryStorage::new();
        let mut dir = directory();
        dir.update_profile("matheus", "Math", "matheus123", "secret").unwrap();
        dir.save(&storage).unwrap();

        let reloaded = UserDirectory::load(&storage, default_users());
        assert_eq!(reloaded.find("matheus").unwrap().display_name, "Math");
        assert!(reloaded.verify("matheus", "secret").is_some());
        assert!(reloaded.verify("matheus", "matheus123").is_none());
    }

    #[test]
    fn test_corrupt_users_blob_uses_base() {
        let storage = MemoryStorage::new();
        storage.set(USERS_KEY, "[oops").unwrap();
        assert_eq!(UserDirectory::load(&storage, default_users()), directory());
    }
}
