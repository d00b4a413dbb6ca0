//! # workday-engine
//!
//! Holiday and workday classification for configurable national calendars.
//!
//! A [`Calendar`] combines yearly fixed holidays, Easter-derived movable
//! holidays (Good Friday, Easter Monday, Pentecost), weekends, and explicit
//! date overrides. Moved workdays take precedence over every other rule.
//! Range queries are thin loops over the single-date classifier.
//!
//! ```rust
//! use chrono::NaiveDate;
//! use workday_engine::{Calendar, CalendarConfig};
//!
//! let calendar = Calendar::new(CalendarConfig::hungarian());
//! let new_year = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! assert!(calendar.is_holiday(new_year).unwrap());
//!
//! let march_start = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//! let march_end = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
//! let counts = calendar.count_days(march_start, march_end).unwrap();
//! assert_eq!((counts.workdays, counts.holidays), (21, 10));
//! ```
//!
//! ## Modules
//!
//! - [`easter`] — Easter Monday, Good Friday and Pentecost dates
//! - [`calendar`] — Fixed holidays, moved workdays, configuration presets
//! - [`classifier`] — Single-date classification and the rule that decided it
//! - [`range`] — Workday/holiday lists, counts and workday stepping
//! - [`error`] — Error types

pub mod calendar;
pub mod classifier;
pub mod easter;
pub mod error;
pub mod range;

pub use calendar::{CalendarConfig, FixedHoliday, MovedWorkday, DEFAULT_FIXED_HOLIDAYS};
pub use classifier::{Calendar, DayKind};
pub use easter::{easter_monday, good_friday, good_friday_from, pentecost, pentecost_from};
pub use error::WorkdayError;
pub use range::DayCounts;
