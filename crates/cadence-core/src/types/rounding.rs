//! Rounding policies for shaping exact values into decimals.
//!
//! [`RoundingPolicy`] is the only place in the library where precision is
//! given up. Each variant maps onto a native `rust_decimal`
//! [`RoundingStrategy`] through [`RoundingPolicy::strategy`];
//! `Unnecessary` has no native counterpart and instead asserts exactness.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{CadenceError, CadenceResult};
use crate::types::Ratio;

/// How an inexact value is rounded to a target scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RoundingPolicy {
    /// Away from zero.
    Up,
    /// Toward zero (truncation).
    Down,
    /// Toward positive infinity.
    Ceiling,
    /// Toward negative infinity.
    Floor,
    /// Nearest neighbour; ties away from zero.
    HalfUp,
    /// Nearest neighbour; ties toward zero.
    HalfDown,
    /// Nearest neighbour; ties to the even digit (banker's rounding).
    HalfEven,
    /// No rounding allowed: the value must already fit the scale.
    #[default]
    Unnecessary,
}

impl RoundingPolicy {
    /// Largest scale a `Decimal` can carry.
    pub const MAX_SCALE: u32 = 28;

    /// Every policy, in declaration order.
    pub const ALL: [RoundingPolicy; 8] = [
        RoundingPolicy::Up,
        RoundingPolicy::Down,
        RoundingPolicy::Ceiling,
        RoundingPolicy::Floor,
        RoundingPolicy::HalfUp,
        RoundingPolicy::HalfDown,
        RoundingPolicy::HalfEven,
        RoundingPolicy::Unnecessary,
    ];

    /// The native `rust_decimal` strategy for this policy.
    ///
    /// Returns `None` for [`RoundingPolicy::Unnecessary`].
    #[must_use]
    pub fn strategy(&self) -> Option<RoundingStrategy> {
        match self {
            RoundingPolicy::Up => Some(RoundingStrategy::AwayFromZero),
            RoundingPolicy::Down => Some(RoundingStrategy::ToZero),
            RoundingPolicy::Ceiling => Some(RoundingStrategy::ToPositiveInfinity),
            RoundingPolicy::Floor => Some(RoundingStrategy::ToNegativeInfinity),
            RoundingPolicy::HalfUp => Some(RoundingStrategy::MidpointAwayFromZero),
            RoundingPolicy::HalfDown => Some(RoundingStrategy::MidpointTowardZero),
            RoundingPolicy::HalfEven => Some(RoundingStrategy::MidpointNearestEven),
            RoundingPolicy::Unnecessary => None,
        }
    }

    /// Rounds an exact ratio to `scale` fractional digits.
    ///
    /// The result always carries exactly `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// - `CadenceError::InexactDivision` for `Unnecessary` when the value does
    ///   not terminate within `scale` digits
    /// - `CadenceError::InvalidScale` if `scale` exceeds [`Self::MAX_SCALE`]
    /// - `CadenceError::Overflow` if the result does not fit a `Decimal`
    ///
    /// # Example
    ///
    /// ```rust
    /// use cadence_core::types::{Ratio, RoundingPolicy};
    /// use rust_decimal_macros::dec;
    ///
    /// let two_and_a_half = Ratio::new(5, 2).unwrap();
    /// assert_eq!(RoundingPolicy::HalfEven.apply(two_and_a_half, 0).unwrap(), dec!(2));
    /// assert_eq!(RoundingPolicy::HalfUp.apply(two_and_a_half, 0).unwrap(), dec!(3));
    /// assert!(RoundingPolicy::Unnecessary.apply(two_and_a_half, 0).is_err());
    /// ```
    pub fn apply(&self, value: Ratio, scale: u32) -> CadenceResult<Decimal> {
        check_scale(scale)?;

        let overflow = || CadenceError::overflow(format!("{value} at scale {scale}"));
        let negative = value.is_negative();
        let denominator = value.denominator().unsigned_abs();

        // Long division on magnitudes: integer part first, then one digit per
        // fractional place. The quotient rounds toward zero.
        let numerator = value.numerator().unsigned_abs();
        let mut quotient = numerator / denominator;
        let mut remainder = numerator % denominator;
        for _ in 0..scale {
            let (digit, rest) = next_digit(remainder, denominator);
            quotient = quotient
                .checked_mul(10)
                .and_then(|q| q.checked_add(digit))
                .ok_or_else(overflow)?;
            remainder = rest;
        }

        if remainder != 0 {
            // remainder vs. what is left of the divisor: the discarded
            // fraction against one half
            let tie = remainder.cmp(&(denominator - remainder));
            match self.decide(negative, tie, quotient) {
                Some(true) => quotient = quotient.checked_add(1).ok_or_else(overflow)?,
                Some(false) => {}
                None => {
                    log::debug!("rounding required for {value} at scale {scale}");
                    return Err(CadenceError::inexact_division(value, scale));
                }
            }
        }

        let magnitude = i128::try_from(quotient).map_err(|_| overflow())?;
        let signed = if negative { -magnitude } else { magnitude };
        Decimal::try_from_i128_with_scale(signed, scale).map_err(|_| overflow())
    }

    /// Rounds an existing decimal to `scale` fractional digits through the
    /// native strategy table.
    ///
    /// The result always carries exactly `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// - `CadenceError::InexactDivision` for `Unnecessary` when non-zero
    ///   digits would be dropped
    /// - `CadenceError::InvalidScale` if `scale` exceeds [`Self::MAX_SCALE`]
    pub fn round(&self, value: Decimal, scale: u32) -> CadenceResult<Decimal> {
        check_scale(scale)?;

        let mut rounded = match self.strategy() {
            Some(strategy) => value.round_dp_with_strategy(scale, strategy),
            None => {
                let truncated = value.round_dp_with_strategy(scale, RoundingStrategy::ToZero);
                if truncated != value {
                    log::debug!("rounding required for {value} at scale {scale}");
                    return Err(CadenceError::inexact_division(value, scale));
                }
                truncated
            }
        };
        rounded.rescale(scale);
        Ok(rounded)
    }

    /// Whether an inexact truncated quotient moves one unit away from zero.
    ///
    /// `tie` compares the discarded fraction with one half. Returns `None` for
    /// `Unnecessary`, which never rounds.
    fn decide(&self, negative: bool, tie: Ordering, quotient: u128) -> Option<bool> {
        let away = match self {
            RoundingPolicy::Up => true,
            RoundingPolicy::Down => false,
            RoundingPolicy::Ceiling => !negative,
            RoundingPolicy::Floor => negative,
            RoundingPolicy::HalfUp => tie != Ordering::Less,
            RoundingPolicy::HalfDown => tie == Ordering::Greater,
            RoundingPolicy::HalfEven => match tie {
                Ordering::Greater => true,
                Ordering::Less => false,
                Ordering::Equal => quotient % 2 != 0,
            },
            RoundingPolicy::Unnecessary => return None,
        };
        Some(away)
    }
}

/// One step of long division: `(10 * remainder) / divisor` and its remainder,
/// for `remainder < divisor`, without forming `10 * remainder`.
fn next_digit(remainder: u128, divisor: u128) -> (u128, u128) {
    let mut digit = 0;
    let mut rest = 0;
    for _ in 0..10 {
        let gap = divisor - rest;
        if remainder >= gap {
            rest = remainder - gap;
            digit += 1;
        } else {
            rest += remainder;
        }
    }
    (digit, rest)
}

fn check_scale(scale: u32) -> CadenceResult<()> {
    if scale > RoundingPolicy::MAX_SCALE {
        return Err(CadenceError::InvalidScale { scale });
    }
    Ok(())
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingPolicy::Up => "UP",
            RoundingPolicy::Down => "DOWN",
            RoundingPolicy::Ceiling => "CEILING",
            RoundingPolicy::Floor => "FLOOR",
            RoundingPolicy::HalfUp => "HALF_UP",
            RoundingPolicy::HalfDown => "HALF_DOWN",
            RoundingPolicy::HalfEven => "HALF_EVEN",
            RoundingPolicy::Unnecessary => "UNNECESSARY",
        };
        write!(f, "{name}")
    }
}
