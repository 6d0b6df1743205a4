//! Source of the current date.

use chrono::{Local, NaiveDate};

/// Supplies today's date for newly added habits.
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date from the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}
