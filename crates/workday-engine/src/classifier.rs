//! Single-date holiday classification.
//!
//! Rules are checked in a fixed order and the first match wins:
//!
//! 1. `moved_to` of a moved workday → workday
//! 2. `original` of a moved workday → holiday
//! 3. additional workday → workday
//! 4. Saturday or Sunday → holiday
//! 5. fixed holiday → holiday
//! 6. Good Friday, Easter Monday or Pentecost (if observed) → holiday
//! 7. otherwise → workday

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use crate::calendar::CalendarConfig;
use crate::easter;
use crate::error::Result;

/// The rule that decided a date's classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayKind {
    /// Target of a moved workday.
    MovedWorkday,
    /// Source of a moved workday.
    MovedHoliday,
    AdditionalWorkday,
    Weekend,
    FixedHoliday,
    GoodFriday,
    EasterMonday,
    Pentecost,
    /// No rule matched.
    Workday,
}

impl DayKind {
    pub fn is_holiday(self) -> bool {
        matches!(
            self,
            DayKind::MovedHoliday
                | DayKind::Weekend
                | DayKind::FixedHoliday
                | DayKind::GoodFriday
                | DayKind::EasterMonday
                | DayKind::Pentecost
        )
    }
}

/// Holiday engine over an immutable [`CalendarConfig`].
///
/// Every query is a pure function of the configuration and its arguments, so a
/// `Calendar` can be shared freely between threads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Calendar {
    config: CalendarConfig,
}

impl Calendar {
    pub fn new(config: CalendarConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CalendarConfig {
        &self.config
    }

    /// Determine which rule classifies `date`.
    ///
    /// # Errors
    /// Returns `WorkdayError::YearOutOfRange` only when the movable-holiday
    /// rule is reached for a year outside 1901..=2099. Dates settled by an
    /// earlier rule never fail.
    pub fn day_kind(&self, date: NaiveDate) -> Result<DayKind> {
        let config = &self.config;

        if config.moved_workdays.iter().any(|m| m.moved_to == date) {
            return Ok(DayKind::MovedWorkday);
        }
        if config.moved_workdays.iter().any(|m| m.original == date) {
            return Ok(DayKind::MovedHoliday);
        }
        if config.additional_workdays.contains(&date) {
            return Ok(DayKind::AdditionalWorkday);
        }
        if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            return Ok(DayKind::Weekend);
        }
        if config.fixed_holidays.iter().any(|h| h.matches(date)) {
            return Ok(DayKind::FixedHoliday);
        }
        if config.observe_movable_holidays {
            let easter_monday = easter::easter_monday(date.year())?;
            if date == easter_monday {
                return Ok(DayKind::EasterMonday);
            }
            if date == easter::good_friday_from(easter_monday) {
                return Ok(DayKind::GoodFriday);
            }
            if date == easter::pentecost_from(easter_monday) {
                return Ok(DayKind::Pentecost);
            }
        }
        Ok(DayKind::Workday)
    }

    pub fn is_holiday(&self, date: NaiveDate) -> Result<bool> {
        self.day_kind(date).map(DayKind::is_holiday)
    }

    pub fn is_workday(&self, date: NaiveDate) -> Result<bool> {
        self.is_holiday(date).map(|holiday| !holiday)
    }

    /// Good Friday, Easter Monday and Pentecost for `year`, in date order.
    ///
    /// These are the candidate dates only; overrides and weekends are not
    /// applied, and the list is returned even if movable holidays are off.
    pub fn movable_holidays(&self, year: i32) -> Result<[NaiveDate; 3]> {
        let easter_monday = easter::easter_monday(year)?;
        Ok([
            easter::good_friday_from(easter_monday),
            easter_monday,
            easter::pentecost_from(easter_monday),
        ])
    }
}
