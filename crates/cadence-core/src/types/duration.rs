//! Durations: non-negative quantities tagged with a time unit.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::{CadenceError, CadenceResult};
use crate::types::{Ratio, TimeUnit};

/// An immutable length of time.
///
/// Equality is structural: `Duration::minutes(60)` and `Duration::hours(1)`
/// describe the same length but are different values. Use
/// [`Duration::compare`] for magnitude comparisons.
///
/// # Example
///
/// ```rust
/// use cadence_core::types::{Duration, TimeUnit};
///
/// let shift = Duration::hours(8);
/// let minutes = shift.convert_to(TimeUnit::Minute).unwrap();
/// assert_eq!(minutes, Duration::minutes(480));
/// assert!(shift.convert_to(TimeUnit::Month).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Duration {
    quantity: u64,
    unit: TimeUnit,
}

impl Duration {
    /// Creates a duration of `quantity` units.
    #[must_use]
    pub const fn new(quantity: u64, unit: TimeUnit) -> Self {
        Self { quantity, unit }
    }

    /// Creates a duration in milliseconds.
    #[must_use]
    pub const fn milliseconds(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Millisecond)
    }

    /// Creates a duration in seconds.
    #[must_use]
    pub const fn seconds(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Second)
    }

    /// Creates a duration in minutes.
    #[must_use]
    pub const fn minutes(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Minute)
    }

    /// Creates a duration in hours.
    #[must_use]
    pub const fn hours(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Hour)
    }

    /// Creates a duration in days.
    #[must_use]
    pub const fn days(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Day)
    }

    /// Creates a duration in weeks.
    #[must_use]
    pub const fn weeks(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Week)
    }

    /// Creates a duration in months.
    #[must_use]
    pub const fn months(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Month)
    }

    /// Creates a duration in quarters.
    #[must_use]
    pub const fn quarters(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Quarter)
    }

    /// Creates a duration in years.
    #[must_use]
    pub const fn years(quantity: u64) -> Self {
        Self::new(quantity, TimeUnit::Year)
    }

    /// Returns the quantity, in [`Self::unit`]s.
    #[must_use]
    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Returns the unit.
    #[must_use]
    pub fn unit(&self) -> TimeUnit {
        self.unit
    }

    /// Returns the length in the base unit of the unit's family
    /// (milliseconds or months).
    #[must_use]
    pub fn in_base_units(&self) -> u128 {
        u128::from(self.quantity) * u128::from(self.unit.factor())
    }

    /// Returns true if the duration has zero length.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.quantity == 0
    }

    /// Re-expresses the duration in another unit of the same family.
    ///
    /// # Errors
    ///
    /// - `CadenceError::IncompatibleUnit` if `target` is in another family
    /// - `CadenceError::InexactDivision` if the length is not a whole number
    ///   of `target` units (90 minutes in hours)
    /// - `CadenceError::Overflow` if the quantity no longer fits in `u64`
    pub fn convert_to(&self, target: TimeUnit) -> CadenceResult<Duration> {
        self.check_compatible(target)?;
        let base = self.in_base_units();
        let factor = u128::from(target.factor());
        if base % factor != 0 {
            return Err(CadenceError::inexact_division(
                format!("{self} in {}", target.plural_name()),
                0,
            ));
        }
        let quantity = u64::try_from(base / factor)
            .map_err(|_| CadenceError::overflow(format!("{self} in {}", target.plural_name())))?;
        Ok(Duration::new(quantity, target))
    }

    /// Divides this duration by another, giving an exact dimensionless ratio.
    ///
    /// Rounding is left to the caller (see [`Ratio::decimal_value`]).
    ///
    /// # Errors
    ///
    /// - `CadenceError::IncompatibleUnit` if the units are in different families
    /// - `CadenceError::DivisionByZero` if `divisor` has zero length
    pub fn divided_by(&self, divisor: &Duration) -> CadenceResult<Ratio> {
        self.check_compatible(divisor.unit)?;
        if divisor.is_zero() {
            return Err(CadenceError::division_by_zero(format!("{self} / {divisor}")));
        }
        // u64 quantity times a factor below 2^30 stays well inside i128
        Ratio::new(
            self.in_base_units() as i128,
            divisor.in_base_units() as i128,
        )
    }

    /// Adds two durations, expressed in the finer of the two units.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::IncompatibleUnit` across families and
    /// `CadenceError::Overflow` if the sum does not fit.
    pub fn plus(&self, other: &Duration) -> CadenceResult<Duration> {
        self.check_compatible(other.unit)?;
        let unit = self.unit.finer(other.unit);
        let total = self.in_base_units() + other.in_base_units();
        Self::from_base_units(total, unit)
            .ok_or_else(|| CadenceError::overflow(format!("{self} + {other}")))
    }

    /// Subtracts `other`, expressed in the finer of the two units.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::IncompatibleUnit` across families and
    /// `CadenceError::NegativeDuration` if `other` is longer than `self`.
    pub fn minus(&self, other: &Duration) -> CadenceResult<Duration> {
        self.check_compatible(other.unit)?;
        let unit = self.unit.finer(other.unit);
        let total = self
            .in_base_units()
            .checked_sub(other.in_base_units())
            .ok_or_else(|| CadenceError::NegativeDuration {
                minuend: self.to_string(),
                subtrahend: other.to_string(),
            })?;
        Self::from_base_units(total, unit)
            .ok_or_else(|| CadenceError::overflow(format!("{self} - {other}")))
    }

    /// Compares lengths of two same-family durations.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::IncompatibleUnit` across families.
    pub fn compare(&self, other: &Duration) -> CadenceResult<Ordering> {
        self.check_compatible(other.unit)?;
        Ok(self.in_base_units().cmp(&other.in_base_units()))
    }

    fn check_compatible(&self, other: TimeUnit) -> CadenceResult<()> {
        if self.unit.is_convertible_to(other) {
            Ok(())
        } else {
            Err(CadenceError::incompatible_unit(self.unit, other))
        }
    }

    /// `base` is always a multiple of the finer unit's factor here, because
    /// every factor in a family divides the next one up.
    fn from_base_units(base: u128, unit: TimeUnit) -> Option<Duration> {
        let quantity = u64::try_from(base / u128::from(unit.factor())).ok()?;
        Some(Duration::new(quantity, unit))
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let unit = if self.quantity == 1 {
            self.unit.name()
        } else {
            self.unit.plural_name()
        };
        write!(f, "{} {}", self.quantity, unit)
    }
}

impl FromStr for Duration {
    type Err = CadenceError;

    /// Parses `"<quantity> <unit>"`, with a singular or plural unit name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(CadenceError::missing_argument("duration"));
        }
        let (quantity, unit) = trimmed
            .split_once(' ')
            .ok_or_else(|| CadenceError::invalid_duration(s))?;
        let quantity = quantity
            .parse::<u64>()
            .map_err(|_| CadenceError::invalid_duration(s))?;
        Ok(Duration::new(quantity, unit.parse()?))
    }
}
