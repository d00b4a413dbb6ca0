//! Range queries built on the single-date classifier.
//!
//! All ranges are inclusive on both ends. Each day in the range is classified
//! exactly once.

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::classifier::Calendar;
use crate::error::{Result, WorkdayError};

/// Upper bound on how far a workday search walks before giving up.
const MAX_SEARCH_DAYS: u32 = 366;

/// Workday and holiday totals for a date range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DayCounts {
    pub workdays: usize,
    pub holidays: usize,
}

impl DayCounts {
    pub fn total(&self) -> usize {
        self.workdays + self.holidays
    }
}

fn check_range(start: NaiveDate, end: NaiveDate) -> Result<()> {
    if start > end {
        tracing::debug!(%start, %end, "rejected inverted range");
        return Err(WorkdayError::InvalidRange { start, end });
    }
    Ok(())
}

/// Every date in `start..=end`, ascending.
fn days(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start), |d| d.succ_opt()).take_while(move |d| *d <= end)
}

impl Calendar {
    /// All workdays in `start..=end`, ascending.
    ///
    /// # Errors
    /// `WorkdayError::InvalidRange` if `start > end`, or any classification
    /// error for a date in the range.
    pub fn list_workdays(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        self.filter_range(start, end, false)
    }

    /// All holidays in `start..=end`, ascending.
    ///
    /// # Errors
    /// Same as [`Calendar::list_workdays`].
    pub fn list_holidays(&self, start: NaiveDate, end: NaiveDate) -> Result<Vec<NaiveDate>> {
        self.filter_range(start, end, true)
    }

    /// Count workdays and holidays in `start..=end` in a single pass.
    pub fn count_days(&self, start: NaiveDate, end: NaiveDate) -> Result<DayCounts> {
        check_range(start, end)?;

        let mut counts = DayCounts::default();
        for date in days(start, end) {
            if self.is_holiday(date)? {
                counts.holidays += 1;
            } else {
                counts.workdays += 1;
            }
        }

        tracing::debug!(
            %start,
            %end,
            workdays = counts.workdays,
            holidays = counts.holidays,
            "counted days"
        );
        Ok(counts)
    }

    fn filter_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        holidays: bool,
    ) -> Result<Vec<NaiveDate>> {
        check_range(start, end)?;

        let mut out = Vec::new();
        for date in days(start, end) {
            if self.is_holiday(date)? == holidays {
                out.push(date);
            }
        }

        tracing::debug!(%start, %end, holidays, found = out.len(), "listed range");
        Ok(out)
    }

    /// The first workday strictly after `date`.
    pub fn next_workday(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.step_workday(date, true)
    }

    /// The last workday strictly before `date`.
    pub fn previous_workday(&self, date: NaiveDate) -> Result<NaiveDate> {
        self.step_workday(date, false)
    }

    /// Move `n` workdays away from `date`: forward for positive `n`, backward
    /// for negative. `n == 0` returns `date` as is, holiday or not.
    pub fn add_workdays(&self, date: NaiveDate, n: i32) -> Result<NaiveDate> {
        let forward = n > 0;
        let mut current = date;
        for _ in 0..n.unsigned_abs() {
            current = self.step_workday(current, forward)?;
        }
        Ok(current)
    }

    fn step_workday(&self, from: NaiveDate, forward: bool) -> Result<NaiveDate> {
        let mut current = from;
        for _ in 0..MAX_SEARCH_DAYS {
            let next = if forward {
                current.checked_add_days(Days::new(1))
            } else {
                current.checked_sub_days(Days::new(1))
            };
            current = next.ok_or(WorkdayError::NoWorkday { from })?;
            tracing::trace!(%current, "workday search step");
            if self.is_workday(current)? {
                return Ok(current);
            }
        }
        tracing::debug!(%from, forward, "no workday within search bound");
        Err(WorkdayError::NoWorkday { from })
    }
}
