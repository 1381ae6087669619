//! In-memory storage layer

pub mod catalog;
pub mod directory;

pub use catalog::Catalog;
pub use directory::Directory;

/// Main repository struct holding the book and user tables
#[derive(Debug, Clone, Default)]
pub struct Repository {
    pub books: Catalog,
    pub users: Directory,
}

impl Repository {
    pub fn new() -> Self {
        Self::default()
    }
}
