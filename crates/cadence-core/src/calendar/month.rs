//! Calendar months.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::CalendarDate;
use crate::error::{CadenceError, CadenceResult};

/// A month of a particular year, such as March 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarMonth", into = "RawCalendarMonth")]
pub struct CalendarMonth {
    year: i32,
    month: u32,
}

#[derive(Serialize, Deserialize)]
struct RawCalendarMonth {
    year: i32,
    month: u32,
}

impl TryFrom<RawCalendarMonth> for CalendarMonth {
    type Error = CadenceError;

    fn try_from(raw: RawCalendarMonth) -> Result<Self, Self::Error> {
        CalendarMonth::new(raw.year, raw.month)
    }
}

impl From<CalendarMonth> for RawCalendarMonth {
    fn from(month: CalendarMonth) -> Self {
        RawCalendarMonth {
            year: month.year,
            month: month.month,
        }
    }
}

impl CalendarMonth {
    /// Creates a calendar month.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if `month` is outside 1-12 or the
    /// year is outside the supported date range.
    pub fn new(year: i32, month: u32) -> CadenceResult<Self> {
        CalendarDate::from_ymd(year, month, 1)
            .map(|_| Self { year, month })
            .map_err(|_| CadenceError::invalid_date(format!("{year}-{month:02}")))
    }

    /// Returns the month containing `date`.
    #[must_use]
    pub fn containing(date: CalendarDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Returns the year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Returns the month number (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.month
    }

    /// Returns the number of days in the month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        match self.month {
            1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
            4 | 6 | 9 | 11 => 30,
            _ if is_leap_year(self.year) => 29,
            _ => 28,
        }
    }

    /// Returns the given day of the month, if it exists.
    #[must_use]
    pub fn day(&self, day: u32) -> Option<CalendarDate> {
        CalendarDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Returns the first day of the month.
    #[must_use]
    pub fn first_day(&self) -> CalendarDate {
        self.day(1).expect("first of month should always be valid")
    }

    /// Returns the last day of the month.
    #[must_use]
    pub fn last_day(&self) -> CalendarDate {
        self.day(self.days_in_month())
            .expect("end of month should always be valid")
    }

    /// Returns the `n`-th (1-based) `weekday` of the month, if the month has
    /// that many.
    #[must_use]
    pub fn nth_weekday(&self, weekday: Weekday, n: u8) -> Option<CalendarDate> {
        if n == 0 {
            return None;
        }
        let first = self.first_day();
        let offset = days_until(first.weekday(), weekday);
        let day = 1 + offset + 7 * (u32::from(n) - 1);
        self.day(day)
    }

    /// Returns the last `weekday` of the month.
    #[must_use]
    pub fn last_weekday(&self, weekday: Weekday) -> CalendarDate {
        let last = self.last_day();
        let back = days_until(weekday, last.weekday());
        self.day(last.day() - back)
            .expect("every month spans at least one full week")
    }
}

impl fmt::Display for CalendarMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Days forward from `from` to the next `to` (0 if equal).
fn days_until(from: Weekday, to: Weekday) -> u32 {
    (7 + to.num_days_from_monday() - from.num_days_from_monday()) % 7
}

fn is_leap_year(year: i32) -> bool {
    chrono::NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
}
