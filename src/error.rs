//! Error types for Booklend

use thiserror::Error;

/// Error codes exposed to presentation layers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    NotAuthorized = 2,
    NoSuchUser = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    ItemNotBorrowed = 22,
}

/// Operations restricted to members
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    BorrowBooks,
    ReturnBooks,
    ViewBorrowedBooks,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Action::BorrowBooks => "borrow books",
            Action::ReturnBooks => "return books",
            Action::ViewBorrowedBooks => "view borrowed books",
        };
        write!(f, "{}", label)
    }
}

/// Main application error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("User not found: {0}")]
    UserNotFound(String),

    #[error("Only members can {0}")]
    NotAuthorized(Action),

    #[error("Book with id {0} not found")]
    BookNotFound(i32),

    #[error("Book with id {0} is not available")]
    BookUnavailable(i32),

    #[error("Book with id {0} not found in borrowed list")]
    BookNotInPossession(i32),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::UserNotFound(_) => ErrorCode::NoSuchUser,
            AppError::NotAuthorized(_) => ErrorCode::NotAuthorized,
            AppError::BookNotFound(_) => ErrorCode::NoSuchItem,
            AppError::BookUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::BookNotInPossession(_) => ErrorCode::ItemNotBorrowed,
        }
    }
}

/// Result type alias for library operations
pub type AppResult<T> = Result<T, AppError>;
