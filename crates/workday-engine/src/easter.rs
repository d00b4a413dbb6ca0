//! Easter-derived movable holidays.
//!
//! Easter Monday is computed with a Gregorian Computus approximation that is
//! exact for 1901..=2099. Good Friday and Pentecost are fixed offsets from it.

use chrono::{Duration, NaiveDate};
use std::ops::RangeInclusive;

use crate::error::{Result, WorkdayError};

/// Years for which [`easter_monday`] is defined.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1901..=2099;

/// Days from Easter Monday to Pentecost.
const PENTECOST_OFFSET: i64 = 49;

/// Days from Good Friday to Easter Monday.
const GOOD_FRIDAY_OFFSET: i64 = 3;

/// Compute Easter Monday for `year`.
///
/// The result is March 1 advanced by `e + 22 + d` days, where `d` and `e` are
/// the usual Gauss terms. When `d == 29` and `e == 6` the date would overshoot
/// April 25, so the offset is pinned to 50 (April 20).
///
/// # Errors
/// Returns `WorkdayError::YearOutOfRange` for years outside [`SUPPORTED_YEARS`].
///
/// ```rust
/// use chrono::NaiveDate;
/// use workday_engine::easter_monday;
///
/// assert_eq!(
///     easter_monday(2024).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 4, 1).unwrap()
/// );
/// ```
pub fn easter_monday(year: i32) -> Result<NaiveDate> {
    if !SUPPORTED_YEARS.contains(&year) {
        tracing::debug!(year, "easter year out of range");
        return Err(WorkdayError::YearOutOfRange { year });
    }

    let a = year % 19;
    let b = year % 4;
    let c = year % 7;
    let d = (19 * a + 24) % 30;
    let e = (2 * b + 4 * c + 6 * d + 5) % 7;

    let offset = if e == 6 && d == 29 { 50 } else { e + 22 + d };

    let march_first =
        NaiveDate::from_ymd_opt(year, 3, 1).ok_or(WorkdayError::YearOutOfRange { year })?;
    Ok(march_first + Duration::days(i64::from(offset)))
}

/// Good Friday: three days before Easter Monday.
pub fn good_friday(year: i32) -> Result<NaiveDate> {
    Ok(good_friday_from(easter_monday(year)?))
}

/// Good Friday for an already-known Easter Monday.
pub fn good_friday_from(easter_monday: NaiveDate) -> NaiveDate {
    easter_monday - Duration::days(GOOD_FRIDAY_OFFSET)
}

/// Pentecost (as observed, Whit Monday): Easter Monday plus 49 days.
pub fn pentecost(year: i32) -> Result<NaiveDate> {
    Ok(pentecost_from(easter_monday(year)?))
}

/// Pentecost for an already-known Easter Monday.
pub fn pentecost_from(easter_monday: NaiveDate) -> NaiveDate {
    easter_monday + Duration::days(PENTECOST_OFFSET)
}
