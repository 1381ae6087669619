//! Booklend
//!
//! An in-memory book lending tracker: a catalog of books, a directory of
//! users, a single login session and the rules for borrowing and returning.
//! Nothing here prints; callers render the returned values themselves.

pub mod config;
pub mod error;
pub mod models;
pub mod repository;
pub mod services;

pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use services::LendingService;
