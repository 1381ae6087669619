//! Loan receipts and return assessment

use chrono::NaiveDate;
use serde::Serialize;

/// Result of a successful borrow
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BorrowReceipt {
    pub book_id: i32,
    pub title: String,
    pub due_date: NaiveDate,
}

/// Result of a successful return
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReturnReceipt {
    pub book_id: i32,
    pub title: String,
    pub on_time: bool,
    pub days_late: i64,
    pub fine_units: i64,
}

/// Lateness of a return
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnAssessment {
    pub on_time: bool,
    pub days_late: i64,
    pub fine_units: i64,
}

/// Assess a return made on `returned_on` for a loan due on `due_date`.
///
/// A return is late only when strictly after the due date; the fine is
/// `fine_per_day` for each day late, uncapped below `i64::MAX`.
pub fn assess_return(due_date: NaiveDate, returned_on: NaiveDate, fine_per_day: i64) -> ReturnAssessment {
    if returned_on > due_date {
        let days_late = (returned_on - due_date).num_days();
        ReturnAssessment {
            on_time: false,
            days_late,
            fine_units: days_late.saturating_mul(fine_per_day),
        }
    } else {
        ReturnAssessment {
            on_time: true,
            days_late: 0,
            fine_units: 0,
        }
    }
}
