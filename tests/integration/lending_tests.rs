//! Lending integration tests

use booklend::{
    config::LoansConfig,
    error::Action,
    models::{Book, Role, User},
    services::{Clock, ManualClock},
    AppError, LendingService,
};
use chrono::{Duration, NaiveDate};
use serde_json::json;

fn start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, 10).unwrap()
}

/// Library with the three demo books and an admin and a member
fn library() -> LendingService<ManualClock> {
    let mut library = LendingService::with_clock(LoansConfig::default(), ManualClock::new(start_date()));
    library.add_book(Book::new(1, "The Alchemist", "Paulo Coelho", "Fiction"));
    library.add_book(Book::new(2, "Clean Code", "Robert C. Martin", "Programming"));
    library.add_book(Book::new(3, "1984", "George Orwell", "Dystopian"));
    library.add_user(User::new("admin", Role::Admin));
    library.add_user(User::new("john", Role::Member));
    library
}

#[test]
fn test_added_book_is_returned_unchanged() {
    let library = library();
    assert_eq!(
        library.get_book(2),
        Some(&Book::new(2, "Clean Code", "Robert C. Martin", "Programming"))
    );
    assert!(library.get_book(4).is_none());
}

#[test]
fn test_borrow_marks_book_due_in_two_weeks() {
    let mut library = library();
    library.login("john").unwrap();

    let receipt = library.borrow_book(1).unwrap();
    assert_eq!(receipt.title, "The Alchemist");

    let book = library.get_book(1).unwrap();
    assert!(!book.is_available());
    assert_eq!(book.due_date(), Some(start_date() + Duration::days(14)));
}

#[test]
fn test_late_return_charges_one_unit_per_day() {
    let mut library = library();
    library.login("john").unwrap();
    let due = library.borrow_book(1).unwrap().due_date;

    library.clock_mut().set(due + Duration::days(3));
    let receipt = library.return_book(1).unwrap();
    assert!(!receipt.on_time);
    assert_eq!(receipt.fine_units, 3);
    assert!(library.get_book(1).unwrap().is_available());
}

#[test]
fn test_return_on_due_date_is_on_time() {
    let mut library = library();
    library.login("john").unwrap();
    library.borrow_book(3).unwrap();

    library.clock_mut().advance_days(14);
    let receipt = library.return_book(3).unwrap();
    assert!(receipt.on_time);
    assert_eq!(receipt.fine_units, 0);
}

#[test]
fn test_borrow_return_round_trip_restores_book() {
    let mut library = library();
    let before = library.get_book(2).cloned();
    library.login("john").unwrap();

    library.borrow_book(2).unwrap();
    library.return_book(2).unwrap();

    assert_eq!(library.get_book(2).cloned(), before);
    assert_eq!(library.get_book(2).unwrap().due_date(), None);
    assert!(library.list_borrowed_books().unwrap().is_empty());
}

#[test]
fn test_second_return_is_rejected() {
    let mut library = library();
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();
    library.return_book(1).unwrap();

    assert_eq!(library.return_book(1), Err(AppError::BookNotInPossession(1)));
}

#[test]
fn test_return_of_book_never_borrowed() {
    let mut library = library();
    library.login("john").unwrap();

    assert_eq!(library.return_book(2), Err(AppError::BookNotInPossession(2)));
    assert!(library.get_book(2).unwrap().is_available());
}

#[test]
fn test_borrowing_borrowed_book_fails_without_change() {
    let mut library = library();
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();

    let snapshot = library.list_books();
    library.clock_mut().advance_days(2);
    assert_eq!(library.borrow_book(1), Err(AppError::BookUnavailable(1)));
    assert_eq!(library.list_books(), snapshot);
    assert_eq!(library.list_borrowed_books().unwrap().len(), 1);
}

#[test]
fn test_other_member_cannot_return_book() {
    let mut library = library();
    library.add_user(User::new("jane", Role::Member));
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();

    library.login("jane").unwrap();
    assert_eq!(library.borrow_book(1), Err(AppError::BookUnavailable(1)));
    assert_eq!(library.return_book(1), Err(AppError::BookNotInPossession(1)));
    assert!(!library.get_book(1).unwrap().is_available());
}

#[test]
fn test_anonymous_caller_is_not_authorized() {
    let mut library = library();
    let snapshot = library.list_books();

    assert_eq!(library.borrow_book(1), Err(AppError::NotAuthorized(Action::BorrowBooks)));
    assert_eq!(library.return_book(1), Err(AppError::NotAuthorized(Action::ReturnBooks)));
    assert_eq!(
        library.list_borrowed_books(),
        Err(AppError::NotAuthorized(Action::ViewBorrowedBooks))
    );
    assert_eq!(library.list_books(), snapshot);
}

#[test]
fn test_admin_is_not_authorized_to_borrow() {
    let mut library = library();
    library.login("admin").unwrap();

    assert_eq!(library.borrow_book(3), Err(AppError::NotAuthorized(Action::BorrowBooks)));
    assert!(library.get_book(3).unwrap().is_available());
    assert!(library.get_user("admin").unwrap().borrowed_book_ids().is_empty());
}

#[test]
fn test_failed_login_keeps_session() {
    let mut library = library();
    library.login("john").unwrap();

    assert_eq!(
        library.login("nonexistent"),
        Err(AppError::UserNotFound("nonexistent".to_string()))
    );
    assert_eq!(library.current_user().map(|u| u.username.as_str()), Some("john"));
    assert!(library.borrow_book(1).is_ok());
}

#[test]
fn test_listing_books_needs_no_login() {
    let library = library();
    let titles: Vec<_> = library.list_books().into_iter().map(|b| b.title).collect();
    assert_eq!(titles, vec!["The Alchemist", "Clean Code", "1984"]);
}

#[test]
fn test_demo_session() {
    let mut library = library();
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();
    library.borrow_book(2).unwrap();

    let borrowed: Vec<_> = library
        .list_borrowed_books()
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(borrowed, vec![1, 2]);

    assert!(library.return_book(1).unwrap().on_time);
    let borrowed: Vec<_> = library
        .list_borrowed_books()
        .unwrap()
        .into_iter()
        .map(|b| b.id)
        .collect();
    assert_eq!(borrowed, vec![2]);
}

#[test]
fn test_book_view_serialization() {
    let mut library = library();
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();

    let views = library.list_borrowed_books().unwrap();
    let value = serde_json::to_value(&views[0]).unwrap();
    assert_eq!(
        value,
        json!({
            "id": 1,
            "title": "The Alchemist",
            "author": "Paulo Coelho",
            "category": "Fiction",
            "available": false,
            "due_date": "2024-05-24"
        })
    );
}

#[test]
fn test_clock_reflects_manual_changes() {
    let mut library = library();
    library.clock_mut().advance_days(-10);
    assert_eq!(library.clock().today(), start_date() - Duration::days(10));
}

#[test]
fn test_replacing_borrowed_book_ends_old_loan() {
    let mut library = library();
    library.add_user(User::new("jane", Role::Member));
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();

    library.add_book(Book::new(1, "Brida", "Paulo Coelho", "Fiction"));
    assert!(library.get_book(1).unwrap().is_available());
    assert!(library.list_borrowed_books().unwrap().is_empty());

    library.login("jane").unwrap();
    let receipt = library.borrow_book(1).unwrap();
    assert_eq!(receipt.title, "Brida");

    library.login("john").unwrap();
    assert_eq!(library.return_book(1), Err(AppError::BookNotInPossession(1)));

    library.login("jane").unwrap();
    let held = library.list_borrowed_books().unwrap();
    assert_eq!(held.len(), 1);
    assert!(!held[0].available);
    assert_eq!(held[0].due_date, Some(receipt.due_date));
}

#[test]
fn test_replacing_logged_in_member_with_admin() {
    let mut library = library();
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();

    library.add_user(User::new("john", Role::Admin));
    assert_eq!(library.current_user().map(|u| u.role), Some(Role::Admin));
    assert_eq!(library.borrow_book(2), Err(AppError::NotAuthorized(Action::BorrowBooks)));
    // The replaced record's loan is not carried over
    assert!(!library.get_book(1).unwrap().is_available());
}

#[test]
fn test_replacing_logged_in_member_resets_borrowed_set() {
    let mut library = library();
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();

    library.add_user(User::new("john", Role::Member));
    assert!(library.list_borrowed_books().unwrap().is_empty());
    assert_eq!(library.return_book(1), Err(AppError::BookNotInPossession(1)));
    assert_eq!(library.borrow_book(1), Err(AppError::BookUnavailable(1)));
}

#[test]
fn test_huge_fine_rate_does_not_overflow() {
    let config = LoansConfig {
        duration_days: 14,
        fine_per_day: i64::MAX / 2,
    };
    let mut library = LendingService::with_clock(config, ManualClock::new(start_date()));
    library.add_book(Book::new(1, "The Alchemist", "Paulo Coelho", "Fiction"));
    library.add_user(User::new("john", Role::Member));
    library.login("john").unwrap();
    library.borrow_book(1).unwrap();

    library.clock_mut().advance_days(17);
    let receipt = library.return_book(1).unwrap();
    assert_eq!(receipt.days_late, 3);
    assert_eq!(receipt.fine_units, i64::MAX);
}
