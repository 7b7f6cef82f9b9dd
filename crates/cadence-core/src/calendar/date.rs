//! Day-granularity calendar dates.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::calendar::CalendarMonth;
use crate::error::{CadenceError, CadenceResult};

/// A calendar date with day granularity and no time zone.
///
/// Newtype over `chrono::NaiveDate`.
///
/// # Example
///
/// ```rust
/// use cadence_core::calendar::CalendarDate;
///
/// let date = CalendarDate::from_ymd(2024, 2, 29).unwrap();
/// assert_eq!(date.year(), 2024);
/// assert_eq!(date.calendar_month().month(), 2);
/// assert!(CalendarDate::from_ymd(2023, 2, 29).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Creates a date from year, month and day.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CadenceResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(CalendarDate)
            .ok_or_else(|| CadenceError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Like [`CalendarDate::from_ymd`], but `None` for a non-existent date.
    #[must_use]
    pub fn from_ymd_opt(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(CalendarDate)
    }

    /// Parses an ISO 8601 date (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> CadenceResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(CalendarDate)
            .map_err(|_| CadenceError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day of month (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Returns the month containing this date.
    #[must_use]
    pub fn calendar_month(&self) -> CalendarMonth {
        CalendarMonth::containing(*self)
    }

    /// Returns true if the date falls in a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Adds a number of days; `None` past the supported range.
    #[must_use]
    pub fn checked_add_days(&self, days: i64) -> Option<Self> {
        self.0
            .checked_add_signed(chrono::Duration::try_days(days)?)
            .map(CalendarDate)
    }

    /// Calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &CalendarDate) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = CadenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalendarDate::parse(s)
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        CalendarDate(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl Add<i64> for CalendarDate {
    type Output = Self;

    /// Adds days to a date.
    ///
    /// Panics past chrono's supported range; use
    /// [`CalendarDate::checked_add_days`] near the limits.
    fn add(self, days: i64) -> Self::Output {
        CalendarDate(self.0 + chrono::Duration::days(days))
    }
}

impl Sub<CalendarDate> for CalendarDate {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: CalendarDate) -> Self::Output {
        other.days_between(&self)
    }
}
