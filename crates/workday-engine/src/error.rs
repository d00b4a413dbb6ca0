//! Error types for workday-engine operations.

use chrono::NaiveDate;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WorkdayError {
    /// Easter-derived dates are only computed for 1901..=2099.
    #[error("Year {year} is outside the supported Easter range 1901..=2099")]
    YearOutOfRange { year: i32 },

    #[error("Invalid range {start}..={end}: start must be <= end")]
    InvalidRange { start: NaiveDate, end: NaiveDate },

    /// A month/day pair that exists in no year (e.g. 02-30).
    #[error("Invalid fixed holiday: month {month}, day {day}")]
    InvalidDate { month: u32, day: u32 },

    #[error("No workday found within a year of {from}")]
    NoWorkday { from: NaiveDate },
}

pub type Result<T> = std::result::Result<T, WorkdayError>;
