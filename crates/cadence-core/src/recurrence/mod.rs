//! Recurrence rules over calendar dates.
//!
//! A [`DateSpecification`] supplies a single operation, the occurrence of
//! the rule in a given year. The search for the first occurrence inside a
//! range and the lazy enumeration of every occurrence ([`Occurrences`]) are
//! written once, on top of that operation.

mod annual;

pub use annual::AnnualDateSpecification;

use std::fmt;
use std::iter::FusedIterator;

use crate::calendar::{CalendarDate, DateRange};
use crate::error::{CadenceError, CadenceResult};

/// A rule that holds on at most one date per calendar year.
///
/// # Example
///
/// ```rust
/// use cadence_core::calendar::{CalendarDate, CalendarInterval};
/// use cadence_core::recurrence::{AnnualDateSpecification, DateSpecification};
///
/// let christmas = AnnualDateSpecification::fixed(12, 25).unwrap();
/// let span = CalendarInterval::years(2023, 3).unwrap();
/// let dates: Vec<_> = christmas.iterate_over(&span).collect();
/// assert_eq!(dates.len(), 3);
/// assert_eq!(dates[0], CalendarDate::from_ymd(2023, 12, 25).unwrap());
/// ```
pub trait DateSpecification {
    /// The date satisfying the rule in `year`, or `None` if the rule does not
    /// occur that year.
    fn occurrence_in_year(&self, year: i32) -> Option<CalendarDate>;

    /// Returns true if `date` satisfies the rule.
    fn is_satisfied_by(&self, date: &CalendarDate) -> bool {
        self.occurrence_in_year(date.year()).as_ref() == Some(date)
    }

    /// The first occurrence contained in `interval`.
    ///
    /// Checks the year of the interval's start and the year after; with at
    /// most one occurrence per year, nothing earlier can be inside the
    /// interval and anything later is not the first.
    fn first_occurrence_on_or_after<R>(&self, interval: &R) -> Option<CalendarDate>
    where
        R: DateRange + ?Sized,
        Self: Sized,
    {
        first_occurrence(self, interval)
    }

    /// Every occurrence contained in `interval`, in increasing order.
    ///
    /// Each call returns an independent cursor. The sequence ends at the
    /// first year whose occurrence is absent or outside the interval.
    fn iterate_over<'a, R>(&'a self, interval: &'a R) -> Occurrences<'a, Self, R>
    where
        R: DateRange + ?Sized,
        Self: Sized,
    {
        Occurrences::new(self, interval)
    }
}

impl<S: DateSpecification + ?Sized> DateSpecification for &S {
    fn occurrence_in_year(&self, year: i32) -> Option<CalendarDate> {
        (**self).occurrence_in_year(year)
    }
}

impl<S: DateSpecification + ?Sized> DateSpecification for Box<S> {
    fn occurrence_in_year(&self, year: i32) -> Option<CalendarDate> {
        (**self).occurrence_in_year(year)
    }
}

fn first_occurrence<S, R>(spec: &S, interval: &R) -> Option<CalendarDate>
where
    S: DateSpecification + ?Sized,
    R: DateRange + ?Sized,
{
    let year = interval.start().year();
    let contained = |date: &CalendarDate| interval.includes(date);

    spec.occurrence_in_year(year)
        .filter(contained)
        .or_else(|| {
            let next_year = year.checked_add(1)?;
            spec.occurrence_in_year(next_year).filter(contained)
        })
}

/// Lazy, forward-only sequence of the occurrences of a rule in a range.
///
/// Created by [`DateSpecification::iterate_over`]. Successive dates fall in
/// successive calendar years.
pub struct Occurrences<'a, S: ?Sized, R: ?Sized> {
    spec: &'a S,
    interval: &'a R,
    year: i32,
    next: Option<CalendarDate>,
}

impl<'a, S, R> Occurrences<'a, S, R>
where
    S: DateSpecification + ?Sized,
    R: DateRange + ?Sized,
{
    fn new(spec: &'a S, interval: &'a R) -> Self {
        let next = first_occurrence(spec, interval);
        let year = next.map_or_else(|| interval.start().year(), |date| date.year());
        Self {
            spec,
            interval,
            year,
            next,
        }
    }

    /// Returns true if another occurrence is available.
    #[must_use]
    pub fn has_next(&self) -> bool {
        self.next.is_some()
    }

    /// The occurrence the next call will yield, without advancing.
    #[must_use]
    pub fn peek(&self) -> Option<&CalendarDate> {
        self.next.as_ref()
    }

    /// Advances the cursor, failing once the sequence is exhausted.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::IteratorExhausted` when no occurrence is left.
    pub fn try_next(&mut self) -> CadenceResult<CalendarDate> {
        self.next().ok_or(CadenceError::IteratorExhausted)
    }

    /// The occurrence for the year after `current`, if it continues the
    /// sequence.
    fn following(&mut self, current: CalendarDate) -> Option<CalendarDate> {
        self.year = self.year.checked_add(1)?;
        self.spec
            .occurrence_in_year(self.year)
            .filter(|date| *date > current && self.interval.includes(date))
    }
}

impl<S, R> Iterator for Occurrences<'_, S, R>
where
    S: DateSpecification + ?Sized,
    R: DateRange + ?Sized,
{
    type Item = CalendarDate;

    fn next(&mut self) -> Option<CalendarDate> {
        let current = self.next.take()?;
        self.next = self.following(current);
        if self.next.is_none() {
            log::trace!("occurrences end after {current} (year {})", self.year);
        }
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.next.is_some() {
            (1, None)
        } else {
            (0, Some(0))
        }
    }
}

impl<S, R> FusedIterator for Occurrences<'_, S, R>
where
    S: DateSpecification + ?Sized,
    R: DateRange + ?Sized,
{
}

impl<S: ?Sized, R: ?Sized> fmt::Debug for Occurrences<'_, S, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Occurrences")
            .field("year", &self.year)
            .field("next", &self.next)
            .finish_non_exhaustive()
    }
}
