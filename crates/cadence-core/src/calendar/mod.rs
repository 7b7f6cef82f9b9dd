//! Calendar primitives consumed by the recurrence rules.
//!
//! This module provides:
//! - [`CalendarDate`]: a single day
//! - [`CalendarMonth`]: a year/month pair
//! - [`CalendarInterval`]: a half-open range of days
//! - [`DateRange`]: the capability the recurrence algorithms need from a range

mod date;
mod interval;
mod month;

pub use date::CalendarDate;
pub use interval::CalendarInterval;
pub use month::CalendarMonth;

/// A set of consecutive dates with a known first day.
///
/// Recurrence searches only ever ask two things of a range: where it begins
/// and whether it contains a candidate date.
pub trait DateRange {
    /// The earliest date of the range.
    fn start(&self) -> CalendarDate;

    /// Returns true if `date` belongs to the range.
    fn includes(&self, date: &CalendarDate) -> bool;
}

impl<R: DateRange + ?Sized> DateRange for &R {
    fn start(&self) -> CalendarDate {
        (**self).start()
    }

    fn includes(&self, date: &CalendarDate) -> bool {
        (**self).includes(date)
    }
}
