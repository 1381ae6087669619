//! Data models for Booklend

pub mod book;
pub mod loan;
pub mod user;

// Re-export commonly used types
pub use book::{Book, BookView, NewBook};
pub use loan::{assess_return, BorrowReceipt, ReturnAssessment, ReturnReceipt};
pub use user::{NewUser, Role, User};
