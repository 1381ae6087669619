//! Book model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Book record held by the catalog.
///
/// Availability is not stored: a book is available exactly when it has no
/// due date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category: String,
    due_date: Option<NaiveDate>,
}

impl Book {
    pub fn new(
        id: i32,
        title: impl Into<String>,
        author: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            category: category.into(),
            due_date: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.due_date.is_none()
    }

    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due_date
    }

    /// Mark the book as borrowed until `due_date`
    pub(crate) fn check_out(&mut self, due_date: NaiveDate) {
        self.due_date = Some(due_date);
    }

    /// Mark the book as available again, returning the due date it had
    pub(crate) fn check_in(&mut self) -> Option<NaiveDate> {
        self.due_date.take()
    }
}

/// Book creation payload (seed files, presentation layers)
#[derive(Debug, Clone, Deserialize)]
pub struct NewBook {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category: String,
}

impl From<NewBook> for Book {
    fn from(book: NewBook) -> Self {
        Book::new(book.id, book.title, book.author, book.category)
    }
}

/// Read-only snapshot of a book for listings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookView {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub category: String,
    pub available: bool,
    pub due_date: Option<NaiveDate>,
}

impl From<&Book> for BookView {
    fn from(book: &Book) -> Self {
        Self {
            id: book.id,
            title: book.title.clone(),
            author: book.author.clone(),
            category: book.category.clone(),
            available: book.is_available(),
            due_date: book.due_date,
        }
    }
}

impl std::fmt::Display for BookView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Book ID: {}, Title: {}, Author: {}, Category: {}, Available: {}",
            self.id, self.title, self.author, self.category, self.available
        )
    }
}
