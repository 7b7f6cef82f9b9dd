//! Time units and unit families.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CadenceError;

/// The base unit a [`TimeUnit`] is measured against.
///
/// Conversion is only defined inside a family: calendar months vary in
/// length, so there is no fixed number of milliseconds in a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimeUnitFamily {
    /// Fixed-length units, measured in milliseconds.
    Millisecond,
    /// Calendar units, measured in months.
    Month,
}

/// A unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    /// One millisecond.
    Millisecond,
    /// 1 000 milliseconds.
    Second,
    /// 60 seconds.
    Minute,
    /// 60 minutes.
    Hour,
    /// 24 hours.
    Day,
    /// 7 days.
    Week,
    /// One calendar month.
    Month,
    /// 3 months.
    Quarter,
    /// 12 months.
    Year,
}

impl TimeUnit {
    /// All units, finest first within each family.
    pub const ALL: [TimeUnit; 9] = [
        TimeUnit::Millisecond,
        TimeUnit::Second,
        TimeUnit::Minute,
        TimeUnit::Hour,
        TimeUnit::Day,
        TimeUnit::Week,
        TimeUnit::Month,
        TimeUnit::Quarter,
        TimeUnit::Year,
    ];

    /// Returns the family this unit belongs to.
    #[must_use]
    pub fn family(&self) -> TimeUnitFamily {
        match self {
            TimeUnit::Millisecond
            | TimeUnit::Second
            | TimeUnit::Minute
            | TimeUnit::Hour
            | TimeUnit::Day
            | TimeUnit::Week => TimeUnitFamily::Millisecond,
            TimeUnit::Month | TimeUnit::Quarter | TimeUnit::Year => TimeUnitFamily::Month,
        }
    }

    /// Returns how many family base units make up one of this unit.
    #[must_use]
    pub fn factor(&self) -> u64 {
        match self {
            TimeUnit::Millisecond => 1,
            TimeUnit::Second => 1_000,
            TimeUnit::Minute => 60_000,
            TimeUnit::Hour => 3_600_000,
            TimeUnit::Day => 86_400_000,
            TimeUnit::Week => 604_800_000,
            TimeUnit::Month => 1,
            TimeUnit::Quarter => 3,
            TimeUnit::Year => 12,
        }
    }

    /// Returns true if quantities in `self` and `other` can be converted
    /// into each other.
    #[must_use]
    pub fn is_convertible_to(&self, other: TimeUnit) -> bool {
        self.family() == other.family()
    }

    /// Returns the finer of two units of the same family.
    #[must_use]
    pub fn finer(self, other: TimeUnit) -> TimeUnit {
        if self.factor() <= other.factor() {
            self
        } else {
            other
        }
    }

    /// Canonical lowercase singular name, as used in persisted strings.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "millisecond",
            TimeUnit::Second => "second",
            TimeUnit::Minute => "minute",
            TimeUnit::Hour => "hour",
            TimeUnit::Day => "day",
            TimeUnit::Week => "week",
            TimeUnit::Month => "month",
            TimeUnit::Quarter => "quarter",
            TimeUnit::Year => "year",
        }
    }

    /// Plural name, used when rendering a quantity other than one.
    #[must_use]
    pub fn plural_name(&self) -> &'static str {
        match self {
            TimeUnit::Millisecond => "milliseconds",
            TimeUnit::Second => "seconds",
            TimeUnit::Minute => "minutes",
            TimeUnit::Hour => "hours",
            TimeUnit::Day => "days",
            TimeUnit::Week => "weeks",
            TimeUnit::Month => "months",
            TimeUnit::Quarter => "quarters",
            TimeUnit::Year => "years",
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TimeUnit {
    type Err = CadenceError;

    /// Parses a singular or plural unit name, ignoring ASCII case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        TimeUnit::ALL
            .into_iter()
            .find(|unit| {
                trimmed.eq_ignore_ascii_case(unit.name())
                    || trimmed.eq_ignore_ascii_case(unit.plural_name())
            })
            .ok_or_else(|| CadenceError::UnknownTimeUnit {
                name: s.to_string(),
            })
    }
}
