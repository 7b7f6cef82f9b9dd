//! Half-open intervals of calendar dates.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::{CalendarDate, DateRange};
use crate::error::{CadenceError, CadenceResult};

/// The dates `start <= d < end`, or every date from `start` on when the end
/// is unbounded.
///
/// # Example
///
/// ```rust
/// use cadence_core::calendar::{CalendarDate, CalendarInterval, DateRange};
///
/// let span = CalendarInterval::years(2020, 4).unwrap();
/// assert!(span.includes(&CalendarDate::from_ymd(2023, 12, 31).unwrap()));
/// assert!(!span.includes(&CalendarDate::from_ymd(2024, 1, 1).unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCalendarInterval", into = "RawCalendarInterval")]
pub struct CalendarInterval {
    start: CalendarDate,
    end: Option<CalendarDate>,
}

#[derive(Serialize, Deserialize)]
struct RawCalendarInterval {
    start: CalendarDate,
    end: Option<CalendarDate>,
}

impl CalendarInterval {
    /// Creates the interval `[start, end)`.
    ///
    /// `start == end` is allowed and gives an empty interval.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if `end` precedes `start`.
    pub fn new(start: CalendarDate, end: CalendarDate) -> CadenceResult<Self> {
        if end < start {
            return Err(CadenceError::invalid_date(format!(
                "interval end {end} precedes start {start}"
            )));
        }
        Ok(Self {
            start,
            end: Some(end),
        })
    }

    /// Creates the unbounded interval `[start, ∞)`.
    #[must_use]
    pub fn starting_from(start: CalendarDate) -> Self {
        Self { start, end: None }
    }

    /// Creates the interval covering `count` whole calendar years from
    /// 1 January of `first_year`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the years are out of range.
    pub fn years(first_year: i32, count: u32) -> CadenceResult<Self> {
        let last_year = i32::try_from(count)
            .ok()
            .and_then(|count| first_year.checked_add(count))
            .ok_or_else(|| CadenceError::invalid_date(format!("{first_year} + {count} years")))?;
        Self::new(
            CalendarDate::from_ymd(first_year, 1, 1)?,
            CalendarDate::from_ymd(last_year, 1, 1)?,
        )
    }

    /// Returns the first date of the interval.
    #[must_use]
    pub fn start(&self) -> CalendarDate {
        self.start
    }

    /// Returns the exclusive upper bound, or `None` if unbounded.
    #[must_use]
    pub fn end(&self) -> Option<CalendarDate> {
        self.end
    }

    /// Returns true if the interval contains `date`.
    #[must_use]
    pub fn includes(&self, date: &CalendarDate) -> bool {
        *date >= self.start && self.end.map_or(true, |end| *date < end)
    }

    /// Returns true if no date lies in the interval.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.end == Some(self.start)
    }

    /// Returns true if the interval has an upper bound.
    #[must_use]
    pub fn is_bounded(&self) -> bool {
        self.end.is_some()
    }
}

impl DateRange for CalendarInterval {
    fn start(&self) -> CalendarDate {
        self.start
    }

    fn includes(&self, date: &CalendarDate) -> bool {
        CalendarInterval::includes(self, date)
    }
}

impl fmt::Display for CalendarInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.end {
            Some(end) => write!(f, "[{}, {})", self.start, end),
            None => write!(f, "[{}, ∞)", self.start),
        }
    }
}

impl TryFrom<RawCalendarInterval> for CalendarInterval {
    type Error = CadenceError;

    fn try_from(raw: RawCalendarInterval) -> Result<Self, Self::Error> {
        match raw.end {
            Some(end) => CalendarInterval::new(raw.start, end),
            None => Ok(CalendarInterval::starting_from(raw.start)),
        }
    }
}

impl From<CalendarInterval> for RawCalendarInterval {
    fn from(interval: CalendarInterval) -> Self {
        RawCalendarInterval {
            start: interval.start,
            end: interval.end,
        }
    }
}
