//! Active user session

use crate::{
    error::{AppError, AppResult},
    models::User,
    repository::Directory,
};

/// At most one logged-in user, tracked by username
#[derive(Debug, Clone, Default)]
pub struct Session {
    username: Option<String>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `username` the active user if the directory knows it.
    /// On failure the previous session is kept.
    pub fn login(&mut self, users: &Directory, username: &str) -> AppResult<()> {
        if !users.contains(username) {
            return Err(AppError::UserNotFound(username.to_string()));
        }
        self.username = Some(username.to_string());
        Ok(())
    }

    pub fn current<'a>(&self, users: &'a Directory) -> Option<&'a User> {
        self.username.as_deref().and_then(|name| users.get(name))
    }
}
