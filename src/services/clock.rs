//! Time sources for due-date and fine computation

use chrono::{Duration, Local, NaiveDate};

/// Source of the current calendar date
#[cfg_attr(test, mockall::automock)]
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local wall-clock date
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Date that only moves when told to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManualClock {
    today: NaiveDate,
}

impl ManualClock {
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    pub fn set(&mut self, today: NaiveDate) {
        self.today = today;
    }

    /// Move the date by `days` (negative moves backwards), stopping at the
    /// ends of the supported date range
    pub fn advance_days(&mut self, days: i64) {
        let moved = Duration::try_days(days).and_then(|delta| self.today.checked_add_signed(delta));
        self.today = moved.unwrap_or(if days < 0 { NaiveDate::MIN } else { NaiveDate::MAX });
    }
}

impl Clock for ManualClock {
    fn today(&self) -> NaiveDate {
        self.today
    }
}
