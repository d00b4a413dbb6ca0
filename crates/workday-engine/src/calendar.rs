//! Calendar configuration: fixed holidays, date overrides and presets.
//!
//! A [`CalendarConfig`] is assembled up front and handed to
//! [`Calendar::new`](crate::Calendar::new). Nothing here is global; the
//! national default is just another preset value.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WorkdayError};

/// A holiday that recurs every year on the same month and day.
///
/// Deserialization goes through [`FixedHoliday::new`], so impossible dates
/// are rejected on load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFixedHoliday")]
pub struct FixedHoliday {
    pub month: u32,
    pub day: u32,
}

#[derive(Deserialize)]
struct RawFixedHoliday {
    month: u32,
    day: u32,
}

impl TryFrom<RawFixedHoliday> for FixedHoliday {
    type Error = WorkdayError;

    fn try_from(raw: RawFixedHoliday) -> Result<Self> {
        Self::new(raw.month, raw.day)
    }
}

impl FixedHoliday {
    /// Build a fixed holiday, rejecting month/day pairs that exist in no year.
    ///
    /// February 29 is accepted; it only matches in leap years.
    pub fn new(month: u32, day: u32) -> Result<Self> {
        // 2000 is a leap year, so every real month/day pair is valid in it.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(WorkdayError::InvalidDate { month, day });
        }
        Ok(Self { month, day })
    }

    /// True when `date` falls on this month and day.
    pub fn matches(&self, date: NaiveDate) -> bool {
        date.month() == self.month && date.day() == self.day
    }
}

/// A swapped working day.
///
/// `original` (normally a workday) becomes a holiday, and `moved_to`
/// (normally a weekend or holiday) becomes a workday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MovedWorkday {
    pub original: NaiveDate,
    pub moved_to: NaiveDate,
}

impl MovedWorkday {
    /// Swap `original` (now a holiday) with `moved_to` (now a workday).
    pub fn new(original: NaiveDate, moved_to: NaiveDate) -> Self {
        Self { original, moved_to }
    }
}

/// Default fixed holidays: Jan 1, Mar 15, May 1, Aug 20, Oct 23, Nov 1,
/// Dec 25, Dec 26, Dec 31.
pub const DEFAULT_FIXED_HOLIDAYS: [FixedHoliday; 9] = [
    FixedHoliday { month: 1, day: 1 },
    FixedHoliday { month: 3, day: 15 },
    FixedHoliday { month: 5, day: 1 },
    FixedHoliday { month: 8, day: 20 },
    FixedHoliday { month: 10, day: 23 },
    FixedHoliday { month: 11, day: 1 },
    FixedHoliday { month: 12, day: 25 },
    FixedHoliday { month: 12, day: 26 },
    FixedHoliday { month: 12, day: 31 },
];

/// Everything the classifier needs to decide a date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarConfig {
    /// Yearly recurring holidays. Duplicates are harmless.
    pub fixed_holidays: Vec<FixedHoliday>,
    /// Swapped workdays. These beat every other rule.
    #[serde(default)]
    pub moved_workdays: Vec<MovedWorkday>,
    /// Dates forced to be workdays, checked before weekend and holiday rules.
    #[serde(default)]
    pub additional_workdays: Vec<NaiveDate>,
    /// Whether Good Friday, Easter Monday and Pentecost are holidays.
    #[serde(default = "observe_movable_default")]
    pub observe_movable_holidays: bool,
}

fn observe_movable_default() -> bool {
    true
}

impl CalendarConfig {
    /// A configuration with the given fixed holidays, movable holidays
    /// observed and no overrides.
    pub fn new(fixed_holidays: Vec<FixedHoliday>) -> Self {
        Self {
            fixed_holidays,
            moved_workdays: Vec::new(),
            additional_workdays: Vec::new(),
            observe_movable_holidays: true,
        }
    }

    /// The Hungarian preset: [`DEFAULT_FIXED_HOLIDAYS`] plus movable holidays.
    pub fn hungarian() -> Self {
        Self::new(DEFAULT_FIXED_HOLIDAYS.to_vec())
    }

    /// Only Saturdays and Sundays are holidays.
    pub fn weekends_only() -> Self {
        Self::new(Vec::new()).with_movable_holidays(false)
    }

    /// Add one fixed holiday.
    pub fn with_fixed_holiday(mut self, holiday: FixedHoliday) -> Self {
        self.fixed_holidays.push(holiday);
        self
    }

    /// Append moved workdays. Earlier entries keep their place.
    pub fn with_moved_workdays(mut self, moved: impl IntoIterator<Item = MovedWorkday>) -> Self {
        self.moved_workdays.extend(moved);
        self
    }

    /// Append dates that are always workdays, unless a moved workday
    /// makes them holidays.
    pub fn with_additional_workdays(mut self, dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        self.additional_workdays.extend(dates);
        self
    }

    /// Turn Good Friday, Easter Monday and Pentecost on or off.
    pub fn with_movable_holidays(mut self, observe: bool) -> Self {
        self.observe_movable_holidays = observe;
        self
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self::hungarian()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_holiday_rejects_impossible_dates() {
        assert_eq!(
            FixedHoliday::new(2, 30),
            Err(WorkdayError::InvalidDate { month: 2, day: 30 })
        );
        assert!(FixedHoliday::new(13, 1).is_err());
        assert!(FixedHoliday::new(0, 1).is_err());
        assert!(FixedHoliday::new(2, 29).is_ok());
    }

    #[test]
    fn leap_day_only_matches_leap_years() {
        let leap = FixedHoliday::new(2, 29).unwrap();
        assert!(leap.matches(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()));
        assert!(!leap.matches(NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()));
        assert!(!leap.matches(NaiveDate::from_ymd_opt(2025, 3, 1).unwrap()));
    }

    #[test]
    fn default_is_hungarian_preset() {
        let config = CalendarConfig::default();
        assert_eq!(config.fixed_holidays.len(), 9);
        assert!(config.observe_movable_holidays);
        assert!(config.moved_workdays.is_empty());
        assert!(config.additional_workdays.is_empty());
    }

    #[test]
    fn weekends_only_has_no_holiday_rules() {
        let config = CalendarConfig::weekends_only();
        assert!(config.fixed_holidays.is_empty());
        assert!(!config.observe_movable_holidays);
    }
}
