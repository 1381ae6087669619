//! User model and related types

use serde::{Deserialize, Serialize};

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Member,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Member => "member",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "member" => Ok(Role::Member),
            _ => Err(format!("Invalid role: {}", s)),
        }
    }
}

/// User record held by the directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub username: String,
    pub role: Role,
    /// Ids of currently borrowed books, oldest first
    borrowed: Vec<i32>,
}

impl User {
    pub fn new(username: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            role,
            borrowed: Vec::new(),
        }
    }

    pub fn is_member(&self) -> bool {
        self.role == Role::Member
    }

    pub fn borrowed_book_ids(&self) -> &[i32] {
        &self.borrowed
    }

    pub fn has_borrowed(&self, book_id: i32) -> bool {
        self.borrowed.contains(&book_id)
    }

    pub(crate) fn record_borrow(&mut self, book_id: i32) {
        if !self.has_borrowed(book_id) {
            self.borrowed.push(book_id);
        }
    }

    pub(crate) fn record_return(&mut self, book_id: i32) {
        self.borrowed.retain(|id| *id != book_id);
    }
}

/// User creation payload
#[derive(Debug, Clone, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub role: Role,
}

impl From<NewUser> for User {
    fn from(user: NewUser) -> Self {
        User::new(user.username, user.role)
    }
}
