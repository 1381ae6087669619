//! Lending service: borrowing and returning books

use chrono::{Days, NaiveDate};

use crate::{
    config::LoansConfig,
    error::{Action, AppError, AppResult},
    models::{assess_return, Book, BookView, BorrowReceipt, ReturnReceipt, User},
    repository::Repository,
    services::{
        clock::{Clock, SystemClock},
        session::Session,
    },
};

/// Library state and the rules that change it.
///
/// Owns the catalog, the directory and the session. Not synchronized;
/// callers sharing it across threads must wrap it in a lock.
#[derive(Debug)]
pub struct LendingService<C = SystemClock> {
    repository: Repository,
    session: Session,
    config: LoansConfig,
    clock: C,
}

impl LendingService<SystemClock> {
    pub fn new(config: LoansConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> LendingService<C> {
    pub fn with_clock(config: LoansConfig, clock: C) -> Self {
        Self {
            repository: Repository::new(),
            session: Session::new(),
            config,
            clock,
        }
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Add a book to the catalog, replacing any book with the same id
    pub fn add_book(&mut self, book: Book) {
        let id = book.id;
        if self.repository.books.add(book).is_some() {
            // Loans belong to the replaced record, not the new one
            for user in self.repository.users.iter_mut() {
                if user.has_borrowed(id) {
                    tracing::warn!("Book {} replaced while borrowed by {}", id, user.username);
                    user.record_return(id);
                }
            }
            tracing::info!("Book {} replaced in catalog", id);
        } else {
            tracing::info!("Book {} added to catalog", id);
        }
    }

    /// Add a user to the directory, replacing any user with the same name
    pub fn add_user(&mut self, user: User) {
        let username = user.username.clone();
        if self.repository.users.add(user).is_some() {
            tracing::info!("User {} replaced in directory", username);
        } else {
            tracing::info!("User {} added to directory", username);
        }
    }

    pub fn get_book(&self, id: i32) -> Option<&Book> {
        self.repository.books.get(id)
    }

    pub fn get_user(&self, username: &str) -> Option<&User> {
        self.repository.users.get(username)
    }

    pub fn login(&mut self, username: &str) -> AppResult<()> {
        match self.session.login(&self.repository.users, username) {
            Ok(()) => {
                tracing::info!("Logged in as {}", username);
                Ok(())
            }
            Err(e) => {
                tracing::warn!("Login refused: {}", e);
                Err(e)
            }
        }
    }

    pub fn current_user(&self) -> Option<&User> {
        self.session.current(&self.repository.users)
    }

    /// Borrow a book for the logged-in member
    pub fn borrow_book(&mut self, book_id: i32) -> AppResult<BorrowReceipt> {
        let username = self.require_member(Action::BorrowBooks)?;
        let due_date = self.due_date_from(self.clock.today());

        let book = self
            .repository
            .books
            .get_mut(book_id)
            .ok_or(AppError::BookNotFound(book_id))?;
        if !book.is_available() {
            tracing::warn!("Book {} requested by {} is already borrowed", book_id, username);
            return Err(AppError::BookUnavailable(book_id));
        }
        book.check_out(due_date);
        let title = book.title.clone();

        if let Some(user) = self.repository.users.get_mut(&username) {
            user.record_borrow(book_id);
        }

        tracing::info!("Book {} borrowed by {}, due {}", book_id, username, due_date);
        Ok(BorrowReceipt {
            book_id,
            title,
            due_date,
        })
    }

    /// Return a book held by the logged-in member
    pub fn return_book(&mut self, book_id: i32) -> AppResult<ReturnReceipt> {
        let username = self.require_member(Action::ReturnBooks)?;
        let today = self.clock.today();

        let holds_book = self
            .repository
            .users
            .get(&username)
            .map(|user| user.has_borrowed(book_id))
            .unwrap_or(false);
        let checked_in = match self.repository.books.get_mut(book_id) {
            Some(book) if holds_book => book.check_in().map(|due| (due, book.title.clone())),
            _ => None,
        };
        let Some((due_date, title)) = checked_in else {
            tracing::warn!("Book {} is not borrowed by {}", book_id, username);
            return Err(AppError::BookNotInPossession(book_id));
        };

        if let Some(user) = self.repository.users.get_mut(&username) {
            user.record_return(book_id);
        }

        let assessment = assess_return(due_date, today, self.config.fine_per_day);
        if assessment.on_time {
            tracing::info!("Book {} returned on time by {}", book_id, username);
        } else {
            tracing::info!(
                "Book {} returned {} day(s) late by {}, fine {}",
                book_id,
                assessment.days_late,
                username,
                assessment.fine_units
            );
        }

        Ok(ReturnReceipt {
            book_id,
            title,
            on_time: assessment.on_time,
            days_late: assessment.days_late,
            fine_units: assessment.fine_units,
        })
    }

    /// List every book in the catalog. Open to anyone, logged in or not.
    pub fn list_books(&self) -> Vec<BookView> {
        tracing::debug!("Listing {} books", self.repository.books.len());
        self.repository.books.list().map(BookView::from).collect()
    }

    /// List the books held by the logged-in member, oldest borrow first
    pub fn list_borrowed_books(&self) -> AppResult<Vec<BookView>> {
        let username = self.require_member(Action::ViewBorrowedBooks)?;
        let ids = self
            .repository
            .users
            .get(&username)
            .map(|user| user.borrowed_book_ids())
            .unwrap_or_default();

        tracing::debug!("Listing {} borrowed books for {}", ids.len(), username);
        Ok(ids
            .iter()
            .filter_map(|id| self.repository.books.get(*id))
            .map(BookView::from)
            .collect())
    }

    fn require_member(&self, action: Action) -> AppResult<String> {
        match self.current_user() {
            Some(user) if user.is_member() => Ok(user.username.clone()),
            Some(user) => {
                tracing::warn!("{} ({}) may not {}", user.username, user.role, action);
                Err(AppError::NotAuthorized(action))
            }
            None => {
                tracing::warn!("Anonymous caller may not {}", action);
                Err(AppError::NotAuthorized(action))
            }
        }
    }

    fn due_date_from(&self, today: NaiveDate) -> NaiveDate {
        today
            .checked_add_days(Days::new(u64::from(self.config.duration_days)))
            .unwrap_or(NaiveDate::MAX)
    }
}
