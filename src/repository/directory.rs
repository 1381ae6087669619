//! User directory

use indexmap::IndexMap;

use crate::models::User;

/// Users keyed by username
#[derive(Debug, Clone, Default)]
pub struct Directory {
    users: IndexMap<String, User>,
}

impl Directory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a user, replacing any existing user with the same username
    pub fn add(&mut self, user: User) -> Option<User> {
        self.users.insert(user.username.clone(), user)
    }

    pub fn get(&self, username: &str) -> Option<&User> {
        self.users.get(username)
    }

    pub(crate) fn get_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users.get_mut(username)
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut User> {
        self.users.values_mut()
    }

    pub fn contains(&self, username: &str) -> bool {
        self.users.contains_key(username)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
