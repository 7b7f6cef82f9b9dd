//! Once-a-year rules.

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendar::{CalendarDate, CalendarMonth};
use crate::error::{CadenceError, CadenceResult};
use crate::recurrence::DateSpecification;

/// A rule that picks one date in every calendar year.
///
/// # Example
///
/// ```rust
/// use cadence_core::calendar::CalendarDate;
/// use cadence_core::recurrence::{AnnualDateSpecification, DateSpecification};
/// use chrono::Weekday;
///
/// let rule = AnnualDateSpecification::last_weekday(3, Weekday::Mon).unwrap();
/// assert_eq!(rule.to_string(), "last Monday of March");
/// assert_eq!(
///     rule.occurrence_in_year(2024),
///     Some(CalendarDate::from_ymd(2024, 3, 25).unwrap())
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "RawAnnualDateSpecification",
    into = "RawAnnualDateSpecification"
)]
pub enum AnnualDateSpecification {
    /// The same month and day every year, e.g. 25 December.
    ///
    /// February 29 has no occurrence in common years.
    Fixed {
        /// Month (1-12).
        month: u32,
        /// Day of month (1-31).
        day: u32,
    },

    /// The `n`-th given weekday of a month, e.g. the fourth Thursday of
    /// November. A fifth weekday is absent in years that lack one.
    NthWeekday {
        /// Month (1-12).
        month: u32,
        /// Day of week.
        weekday: Weekday,
        /// 1-based occurrence within the month (1-5).
        n: u8,
    },

    /// The last given weekday of a month, e.g. the last Monday of May.
    LastWeekday {
        /// Month (1-12).
        month: u32,
        /// Day of week.
        weekday: Weekday,
    },
}

/// Unvalidated serde shape of an [`AnnualDateSpecification`].
#[derive(Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum RawAnnualDateSpecification {
    Fixed {
        month: u32,
        day: u32,
    },
    NthWeekday {
        month: u32,
        weekday: Weekday,
        n: u8,
    },
    LastWeekday {
        month: u32,
        weekday: Weekday,
    },
}

impl AnnualDateSpecification {
    /// The rule "every `month`/`day`".
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` if the month/day exists in no year
    /// (month 13, 30 February, 31 April).
    pub fn fixed(month: u32, day: u32) -> CadenceResult<Self> {
        // 2000 is a leap year, so every day that exists in some year exists there
        CalendarDate::from_ymd(2000, month, day)
            .map_err(|_| CadenceError::invalid_date(format!("no such day: {month:02}-{day:02}")))?;
        Ok(Self::Fixed { month, day })
    }

    /// The rule "the `n`-th `weekday` of `month`".
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` for a month outside 1-12 or `n`
    /// outside 1-5.
    pub fn nth_weekday(month: u32, weekday: Weekday, n: u8) -> CadenceResult<Self> {
        check_month(month)?;
        if !(1..=5).contains(&n) {
            return Err(CadenceError::invalid_date(format!(
                "weekday occurrence {n} outside 1-5"
            )));
        }
        Ok(Self::NthWeekday { month, weekday, n })
    }

    /// The rule "the last `weekday` of `month`".
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidDate` for a month outside 1-12.
    pub fn last_weekday(month: u32, weekday: Weekday) -> CadenceResult<Self> {
        check_month(month)?;
        Ok(Self::LastWeekday { month, weekday })
    }

    /// The month the rule falls in.
    #[must_use]
    pub fn month(&self) -> u32 {
        match self {
            Self::Fixed { month, .. }
            | Self::NthWeekday { month, .. }
            | Self::LastWeekday { month, .. } => *month,
        }
    }
}

impl DateSpecification for AnnualDateSpecification {
    fn occurrence_in_year(&self, year: i32) -> Option<CalendarDate> {
        match *self {
            Self::Fixed { month, day } => CalendarDate::from_ymd_opt(year, month, day),
            Self::NthWeekday { month, weekday, n } => {
                CalendarMonth::new(year, month).ok()?.nth_weekday(weekday, n)
            }
            Self::LastWeekday { month, weekday } => CalendarMonth::new(year, month)
                .ok()
                .map(|m| m.last_weekday(weekday)),
        }
    }
}

impl fmt::Display for AnnualDateSpecification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Fixed { month, day } => write!(f, "every {} {day}", month_name(month)),
            Self::NthWeekday { month, weekday, n } => write!(
                f,
                "{}{} {} of {}",
                n,
                ordinal_suffix(n),
                weekday_name(weekday),
                month_name(month)
            ),
            Self::LastWeekday { month, weekday } => write!(
                f,
                "last {} of {}",
                weekday_name(weekday),
                month_name(month)
            ),
        }
    }
}

impl TryFrom<RawAnnualDateSpecification> for AnnualDateSpecification {
    type Error = CadenceError;

    fn try_from(raw: RawAnnualDateSpecification) -> Result<Self, Self::Error> {
        match raw {
            RawAnnualDateSpecification::Fixed { month, day } => Self::fixed(month, day),
            RawAnnualDateSpecification::NthWeekday { month, weekday, n } => {
                Self::nth_weekday(month, weekday, n)
            }
            RawAnnualDateSpecification::LastWeekday { month, weekday } => {
                Self::last_weekday(month, weekday)
            }
        }
    }
}

impl From<AnnualDateSpecification> for RawAnnualDateSpecification {
    fn from(rule: AnnualDateSpecification) -> Self {
        match rule {
            AnnualDateSpecification::Fixed { month, day } => Self::Fixed { month, day },
            AnnualDateSpecification::NthWeekday { month, weekday, n } => {
                Self::NthWeekday { month, weekday, n }
            }
            AnnualDateSpecification::LastWeekday { month, weekday } => {
                Self::LastWeekday { month, weekday }
            }
        }
    }
}

fn check_month(month: u32) -> CadenceResult<()> {
    if (1..=12).contains(&month) {
        Ok(())
    } else {
        Err(CadenceError::invalid_date(format!("month {month} outside 1-12")))
    }
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "?",
    }
}

fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

fn ordinal_suffix(n: u8) -> &'static str {
    match n {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarInterval;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn test_fixed_occurrence() {
        let rule = AnnualDateSpecification::fixed(12, 25).unwrap();
        assert_eq!(rule.occurrence_in_year(2025), Some(date(2025, 12, 25)));
        assert!(rule.is_satisfied_by(&date(1999, 12, 25)));
        assert!(!rule.is_satisfied_by(&date(1999, 12, 24)));
    }

    #[test]
    fn test_fixed_validation() {
        assert!(AnnualDateSpecification::fixed(2, 29).is_ok());
        assert!(AnnualDateSpecification::fixed(2, 30).is_err());
        assert!(AnnualDateSpecification::fixed(4, 31).is_err());
        assert!(AnnualDateSpecification::fixed(13, 1).is_err());
        assert!(AnnualDateSpecification::fixed(0, 1).is_err());
    }

    #[test]
    fn test_leap_day_absent_in_common_years() {
        let rule = AnnualDateSpecification::fixed(2, 29).unwrap();
        assert_eq!(rule.occurrence_in_year(2024), Some(date(2024, 2, 29)));
        assert_eq!(rule.occurrence_in_year(2025), None);
        assert_eq!(rule.occurrence_in_year(2100), None);
    }

    #[test]
    fn test_nth_weekday() {
        let thanksgiving = AnnualDateSpecification::nth_weekday(11, Weekday::Thu, 4).unwrap();
        assert_eq!(thanksgiving.occurrence_in_year(2024), Some(date(2024, 11, 28)));
        assert_eq!(thanksgiving.occurrence_in_year(2025), Some(date(2025, 11, 27)));
        assert!(AnnualDateSpecification::nth_weekday(11, Weekday::Thu, 0).is_err());
        assert!(AnnualDateSpecification::nth_weekday(11, Weekday::Thu, 6).is_err());
    }

    #[test]
    fn test_fifth_weekday_may_be_absent() {
        // November 2025 has five Saturdays, November 2023 only four
        let rule = AnnualDateSpecification::nth_weekday(11, Weekday::Sat, 5).unwrap();
        assert_eq!(rule.occurrence_in_year(2025), Some(date(2025, 11, 29)));
        assert_eq!(rule.occurrence_in_year(2023), None);
    }

    #[test]
    fn test_last_weekday() {
        let rule = AnnualDateSpecification::last_weekday(3, Weekday::Mon).unwrap();
        assert_eq!(rule.occurrence_in_year(2025), Some(date(2025, 3, 31)));
        assert_eq!(rule.occurrence_in_year(2024), Some(date(2024, 3, 25)));
        assert!(AnnualDateSpecification::last_weekday(0, Weekday::Mon).is_err());
    }

    #[test]
    fn test_iterate_full_years() {
        let rule = AnnualDateSpecification::fixed(7, 4).unwrap();
        let span = CalendarInterval::years(2020, 5).unwrap();
        let dates: Vec<_> = rule.iterate_over(&span).collect();
        assert_eq!(dates.len(), 5);
        for (i, d) in dates.iter().enumerate() {
            assert_eq!(d.year(), 2020 + i as i32);
            assert!(span.includes(d));
        }
    }

    #[test]
    fn test_iterate_leap_day_stops_at_common_year() {
        let rule = AnnualDateSpecification::fixed(2, 29).unwrap();
        let span = CalendarInterval::years(2024, 8).unwrap();
        let dates: Vec<_> = rule.iterate_over(&span).collect();
        assert_eq!(dates, vec![date(2024, 2, 29)]);
    }

    #[test]
    fn test_first_occurrence_in_following_year() {
        let rule = AnnualDateSpecification::fixed(3, 1).unwrap();
        let span = CalendarInterval::new(date(2025, 6, 1), date(2027, 1, 1)).unwrap();
        assert_eq!(rule.first_occurrence_on_or_after(&span), Some(date(2026, 3, 1)));
    }

    #[test]
    fn test_independent_iterators() {
        let rule = AnnualDateSpecification::last_weekday(5, Weekday::Mon).unwrap();
        let span = CalendarInterval::years(2020, 6).unwrap();
        let mut first = rule.iterate_over(&span);
        first.next();
        first.next();
        let second: Vec<_> = rule.iterate_over(&span).collect();
        let rest: Vec<_> = first.collect();
        assert_eq!(second.len(), 6);
        assert_eq!(rest, second[2..]);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            AnnualDateSpecification::fixed(12, 25).unwrap().to_string(),
            "every December 25"
        );
        assert_eq!(
            AnnualDateSpecification::nth_weekday(11, Weekday::Thu, 4)
                .unwrap()
                .to_string(),
            "4th Thursday of November"
        );
        assert_eq!(
            AnnualDateSpecification::nth_weekday(1, Weekday::Mon, 3)
                .unwrap()
                .to_string(),
            "3rd Monday of January"
        );
    }

    #[test]
    fn test_serde() {
        let rule = AnnualDateSpecification::nth_weekday(11, Weekday::Thu, 4).unwrap();
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(
            json,
            r#"{"kind":"nth_weekday","month":11,"weekday":"Thu","n":4}"#
        );
        let parsed: AnnualDateSpecification = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rule);
    }

    #[test]
    fn test_serde_rejects_invalid_rules() {
        for json in [
            r#"{"kind":"fixed","month":13,"day":40}"#,
            r#"{"kind":"fixed","month":2,"day":30}"#,
            r#"{"kind":"nth_weekday","month":11,"weekday":"Thu","n":0}"#,
            r#"{"kind":"nth_weekday","month":11,"weekday":"Thu","n":6}"#,
            r#"{"kind":"last_weekday","month":0,"weekday":"Mon"}"#,
        ] {
            assert!(
                serde_json::from_str::<AnnualDateSpecification>(json).is_err(),
                "{json}"
            );
        }

        let leap_day: AnnualDateSpecification =
            serde_json::from_str(r#"{"kind":"fixed","month":2,"day":29}"#).unwrap();
        assert_eq!(leap_day.to_string(), "every February 29");
    }
}
