//! Book catalog

use indexmap::IndexMap;

use crate::models::Book;

/// Books keyed by id, listed in first-insertion order
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: IndexMap<i32, Book>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a book, replacing any existing entry with the same id.
    /// A replaced entry keeps its position in listings.
    pub fn add(&mut self, book: Book) -> Option<Book> {
        self.books.insert(book.id, book)
    }

    pub fn get(&self, id: i32) -> Option<&Book> {
        self.books.get(&id)
    }

    pub(crate) fn get_mut(&mut self, id: i32) -> Option<&mut Book> {
        self.books.get_mut(&id)
    }

    pub fn list(&self) -> impl Iterator<Item = &Book> {
        self.books.values()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
