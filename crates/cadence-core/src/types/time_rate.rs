//! Rates: a decimal amount per unit period.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use crate::error::{CadenceError, CadenceResult};
use crate::types::{Duration, RoundingPolicy};

/// An amount per unit of time, such as "1000 per 1 hour".
///
/// Applying a rate to a duration ([`TimeRate::over`]) yields the absolute
/// amount accrued over that duration. Exactness is the default; any
/// rounding has to be requested through a [`RoundingPolicy`].
///
/// # Example
///
/// ```rust
/// use cadence_core::types::{Duration, RoundingPolicy, TimeRate};
/// use rust_decimal_macros::dec;
///
/// let wage = TimeRate::new(dec!(1000), Duration::hours(1)).unwrap();
/// assert_eq!(wage.over(&Duration::hours(3)).unwrap(), dec!(3000));
///
/// let slow = TimeRate::new(dec!(10), Duration::hours(3)).unwrap();
/// assert!(slow.over(&Duration::hours(1)).is_err());
/// assert_eq!(
///     slow.over_with(&Duration::hours(1), 2, RoundingPolicy::HalfUp).unwrap(),
///     dec!(3.33)
/// );
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(try_from = "RawTimeRate", into = "RawTimeRate")]
pub struct TimeRate {
    quantity: Decimal,
    unit: Duration,
}

/// Unvalidated serde shape of a [`TimeRate`].
#[derive(Serialize, Deserialize)]
struct RawTimeRate {
    quantity: Decimal,
    unit: Duration,
}

impl TimeRate {
    /// Creates a rate of `quantity` per `unit`.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::DivisionByZero` if `unit` has zero length.
    pub fn new(quantity: Decimal, unit: Duration) -> CadenceResult<Self> {
        if unit.is_zero() {
            return Err(CadenceError::division_by_zero(format!(
                "rate of {quantity} per {unit}"
            )));
        }
        Ok(Self { quantity, unit })
    }

    /// Creates a rate from a decimal string, preserving its scale.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::MissingArgument` for an empty string,
    /// `CadenceError::InvalidNumber` if it is not a decimal, and the errors
    /// of [`TimeRate::new`].
    pub fn parse(quantity: &str, unit: Duration) -> CadenceResult<Self> {
        let trimmed = quantity.trim();
        if trimmed.is_empty() {
            return Err(CadenceError::missing_argument("quantity"));
        }
        let quantity =
            Decimal::from_str(trimmed).map_err(|_| CadenceError::invalid_number(trimmed))?;
        Self::new(quantity, unit)
    }

    /// Creates a rate from a binary floating point quantity, keeping as much
    /// of its exact expansion as a `Decimal` can hold.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::InvalidNumber` for NaN, infinities, or values
    /// out of `Decimal` range, and the errors of [`TimeRate::new`].
    pub fn from_f64(quantity: f64, unit: Duration) -> CadenceResult<Self> {
        let quantity = Decimal::from_f64_retain(quantity)
            .ok_or_else(|| CadenceError::invalid_number(quantity.to_string()))?;
        Self::new(quantity, unit)
    }

    /// Returns the amount per unit period.
    #[must_use]
    pub fn quantity(&self) -> Decimal {
        self.quantity
    }

    /// Returns the unit period.
    #[must_use]
    pub fn unit(&self) -> Duration {
        self.unit
    }

    /// Number of fractional digits carried by the quantity.
    #[must_use]
    pub fn scale(&self) -> u32 {
        self.quantity.scale()
    }

    /// Amount accrued over `duration`, without any rounding.
    ///
    /// The result has the rate's own [`scale`](Self::scale).
    ///
    /// # Errors
    ///
    /// - `CadenceError::IncompatibleUnit` if `duration` cannot be measured in
    ///   the rate's unit family
    /// - `CadenceError::InexactDivision` if the amount does not terminate at
    ///   the rate's scale
    pub fn over(&self, duration: &Duration) -> CadenceResult<Decimal> {
        self.over_with(duration, self.scale(), RoundingPolicy::Unnecessary)
    }

    /// Amount accrued over `duration`, rounded at the rate's own scale.
    ///
    /// # Errors
    ///
    /// As [`TimeRate::over_with`].
    pub fn over_rounded(&self, duration: &Duration, policy: RoundingPolicy) -> CadenceResult<Decimal> {
        self.over_with(duration, self.scale(), policy)
    }

    /// Amount accrued over `duration`, shaped to `scale` digits by `policy`.
    ///
    /// # Errors
    ///
    /// - `CadenceError::IncompatibleUnit` across unit families
    /// - `CadenceError::InexactDivision` if `policy` is `Unnecessary` and the
    ///   amount does not terminate at `scale`
    /// - `CadenceError::InvalidScale` / `CadenceError::Overflow` from the
    ///   rounding step
    pub fn over_with(
        &self,
        duration: &Duration,
        scale: u32,
        policy: RoundingPolicy,
    ) -> CadenceResult<Decimal> {
        let amount = duration
            .divided_by(&self.unit)?
            .times_decimal(self.quantity)?;
        policy.apply(amount, scale)
    }
}

impl PartialEq for TimeRate {
    /// Structural: `1000` and `1000.0` per hour are different rates.
    fn eq(&self, other: &Self) -> bool {
        self.quantity.mantissa() == other.quantity.mantissa()
            && self.quantity.scale() == other.quantity.scale()
            && self.unit == other.unit
    }
}

impl Eq for TimeRate {}

impl Hash for TimeRate {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.quantity.mantissa().hash(state);
        self.quantity.scale().hash(state);
        self.unit.hash(state);
    }
}

impl fmt::Display for TimeRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} per {}", self.quantity, self.unit)
    }
}

impl TryFrom<RawTimeRate> for TimeRate {
    type Error = CadenceError;

    fn try_from(raw: RawTimeRate) -> Result<Self, Self::Error> {
        TimeRate::new(raw.quantity, raw.unit)
    }
}

impl From<TimeRate> for RawTimeRate {
    fn from(rate: TimeRate) -> Self {
        RawTimeRate {
            quantity: rate.quantity,
            unit: rate.unit,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use std::collections::HashSet;

    #[test]
    fn test_hourly_wage() {
        let rate = TimeRate::new(dec!(1000), Duration::hours(1)).unwrap();
        assert_eq!(rate.over(&Duration::hours(3)).unwrap(), dec!(3000));
    }

    #[test]
    fn test_over_mixed_units() {
        let rate = TimeRate::new(dec!(1000), Duration::hours(1)).unwrap();
        assert_eq!(rate.over(&Duration::minutes(90)).unwrap(), dec!(1500));
        assert_eq!(rate.over(&Duration::days(1)).unwrap(), dec!(24000));
    }

    #[test]
    fn test_over_non_terminating() {
        let rate = TimeRate::new(dec!(10), Duration::hours(3)).unwrap();
        let err = rate.over(&Duration::hours(1)).unwrap_err();
        assert!(err.requires_rounding());
        assert_eq!(
            rate.over_rounded(&Duration::hours(1), RoundingPolicy::Down).unwrap(),
            dec!(3)
        );
        assert_eq!(
            rate.over_with(&Duration::hours(1), 4, RoundingPolicy::HalfEven).unwrap(),
            dec!(3.3333)
        );
    }

    #[test]
    fn test_over_keeps_rate_scale() {
        let rate = TimeRate::parse("12.50", Duration::days(1)).unwrap();
        assert_eq!(rate.scale(), 2);
        let amount = rate.over(&Duration::weeks(1)).unwrap();
        assert_eq!(amount.to_string(), "87.50");
    }

    #[test]
    fn test_over_needs_more_digits_than_rate_scale() {
        // 1/2 hour of 1 per hour is 0.5, which does not fit scale 0
        let rate = TimeRate::new(dec!(1), Duration::hours(1)).unwrap();
        assert!(rate.over(&Duration::minutes(30)).is_err());
        assert_eq!(
            rate.over_with(&Duration::minutes(30), 1, RoundingPolicy::Unnecessary).unwrap(),
            dec!(0.5)
        );
    }

    #[test]
    fn test_over_incompatible_units() {
        let rate = TimeRate::new(dec!(100), Duration::months(1)).unwrap();
        assert!(matches!(
            rate.over(&Duration::days(30)),
            Err(CadenceError::IncompatibleUnit { .. })
        ));
        assert_eq!(rate.over(&Duration::years(1)).unwrap(), dec!(1200));
    }

    #[test]
    fn test_zero_unit_rejected() {
        assert!(matches!(
            TimeRate::new(dec!(1), Duration::hours(0)),
            Err(CadenceError::DivisionByZero { .. })
        ));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            TimeRate::parse("  ", Duration::hours(1)),
            Err(CadenceError::MissingArgument { .. })
        ));
        assert!(matches!(
            TimeRate::parse("ten", Duration::hours(1)),
            Err(CadenceError::InvalidNumber { .. })
        ));
    }

    #[test]
    fn test_from_f64() {
        let rate = TimeRate::from_f64(0.5, Duration::seconds(1)).unwrap();
        assert_eq!(rate.quantity(), dec!(0.5));
        assert!(TimeRate::from_f64(f64::NAN, Duration::seconds(1)).is_err());
    }

    #[test]
    fn test_float_rate_over_its_own_unit() {
        let rate = TimeRate::from_f64(0.1, Duration::hours(1)).unwrap();
        assert_eq!(rate.scale(), 28);
        assert_eq!(rate.over(&Duration::hours(1)).unwrap(), rate.quantity());
        assert_eq!(
            rate.over(&Duration::minutes(120)).unwrap(),
            rate.quantity() * dec!(2)
        );
        assert_eq!(
            rate.over_with(&Duration::hours(3), 2, RoundingPolicy::HalfUp).unwrap(),
            dec!(0.30)
        );
    }

    #[test]
    fn test_high_scale_rate() {
        let rate = TimeRate::new(dec!(1.00000000000000000001), Duration::hours(1)).unwrap();
        assert_eq!(rate.scale(), 20);
        assert_eq!(rate.over(&Duration::hours(1)).unwrap(), rate.quantity());
        assert_eq!(
            rate.over(&Duration::hours(3)).unwrap(),
            dec!(3.00000000000000000003)
        );
        assert!(rate.over(&Duration::minutes(20)).unwrap_err().requires_rounding());
    }

    #[test]
    fn test_structural_equality() {
        let a = TimeRate::parse("1000", Duration::hours(1)).unwrap();
        let b = TimeRate::new(dec!(1000), Duration::hours(1)).unwrap();
        let c = TimeRate::parse("1000.0", Duration::hours(1)).unwrap();
        let d = TimeRate::new(dec!(1000), Duration::minutes(60)).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, d);

        let set: HashSet<TimeRate> = [a, b, c, d].into_iter().collect();
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_display() {
        let rate = TimeRate::new(dec!(1000), Duration::hours(1)).unwrap();
        assert_eq!(rate.to_string(), "1000 per 1 hour");
        let rate = TimeRate::parse("2.5", Duration::weeks(2)).unwrap();
        assert_eq!(rate.to_string(), "2.5 per 2 weeks");
    }

    #[test]
    fn test_serde_validates() {
        let rate = TimeRate::parse("1.25", Duration::days(1)).unwrap();
        let json = serde_json::to_string(&rate).unwrap();
        let parsed: TimeRate = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, rate);

        let bad = r#"{"quantity":"1","unit":{"quantity":0,"unit":"day"}}"#;
        assert!(serde_json::from_str::<TimeRate>(bad).is_err());
    }
}
