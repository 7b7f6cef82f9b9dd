//! Exact rational numbers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CadenceError, CadenceResult};
use crate::types::RoundingPolicy;

/// An exact ratio `numerator / denominator`.
///
/// Always kept in lowest terms with a strictly positive denominator, so
/// derived equality is value equality.
///
/// # Example
///
/// ```rust
/// use cadence_core::types::{Ratio, RoundingPolicy};
/// use rust_decimal_macros::dec;
///
/// let third = Ratio::new(10, 30).unwrap();
/// assert_eq!(third.numerator(), 1);
/// assert_eq!(third.denominator(), 3);
/// assert_eq!(third.decimal_value(2, RoundingPolicy::HalfUp).unwrap(), dec!(0.33));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ratio {
    numerator: i128,
    denominator: i128,
}

impl Ratio {
    /// The ratio `0/1`.
    pub const ZERO: Ratio = Ratio {
        numerator: 0,
        denominator: 1,
    };

    /// The ratio `1/1`.
    pub const ONE: Ratio = Ratio {
        numerator: 1,
        denominator: 1,
    };

    /// Creates a ratio, reducing it to lowest terms.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::DivisionByZero` if `denominator` is zero, and
    /// `CadenceError::Overflow` if the sign cannot be normalised.
    pub fn new(numerator: i128, denominator: i128) -> CadenceResult<Self> {
        if denominator == 0 {
            return Err(CadenceError::division_by_zero(format!(
                "{numerator}/{denominator}"
            )));
        }
        if numerator == 0 {
            return Ok(Self::ZERO);
        }

        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        // divisor >= 1 and divides both, so it fits in i128 unless both are i128::MIN
        let divisor = i128::try_from(divisor)
            .map_err(|_| CadenceError::overflow(format!("{numerator}/{denominator}")))?;
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);

        if denominator < 0 {
            numerator = numerator
                .checked_neg()
                .ok_or_else(|| CadenceError::overflow("ratio sign normalisation"))?;
            denominator = denominator
                .checked_neg()
                .ok_or_else(|| CadenceError::overflow("ratio sign normalisation"))?;
        }

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Creates an integral ratio `value/1`.
    #[must_use]
    pub fn from_integer(value: i128) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Creates the exact ratio of a decimal: its mantissa over `10^scale`.
    #[must_use]
    pub fn from_decimal(value: Decimal) -> Self {
        // scale <= 28, and 10^28 fits comfortably in i128
        let denominator = 10i128.pow(value.scale());
        match Self::new(value.mantissa(), denominator) {
            Ok(ratio) => ratio,
            Err(_) => unreachable!("power of ten is a positive denominator"),
        }
    }

    /// Returns the numerator (carries the sign).
    #[must_use]
    pub fn numerator(&self) -> i128 {
        self.numerator
    }

    /// Returns the denominator (always positive).
    #[must_use]
    pub fn denominator(&self) -> i128 {
        self.denominator
    }

    /// Returns true if the ratio is a whole number.
    #[must_use]
    pub fn is_integer(&self) -> bool {
        self.denominator == 1
    }

    /// Returns true if the ratio is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.numerator == 0
    }

    /// Returns true if the ratio is strictly negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.numerator < 0
    }

    /// Multiplies two ratios exactly.
    ///
    /// Factors are cross-cancelled first, so the product stays in lowest
    /// terms and overflows as late as possible.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Overflow` if the product does not fit in `i128`.
    pub fn times(&self, other: &Ratio) -> CadenceResult<Ratio> {
        if self.is_zero() || other.is_zero() {
            return Ok(Self::ZERO);
        }
        let g1 = gcd_i128(self.numerator, other.denominator);
        let g2 = gcd_i128(other.numerator, self.denominator);

        let overflow = || CadenceError::overflow(format!("{self} * {other}"));
        let numerator = (self.numerator / g1)
            .checked_mul(other.numerator / g2)
            .ok_or_else(overflow)?;
        let denominator = (self.denominator / g2)
            .checked_mul(other.denominator / g1)
            .ok_or_else(overflow)?;

        Ok(Self {
            numerator,
            denominator,
        })
    }

    /// Multiplies by a decimal exactly.
    ///
    /// # Errors
    ///
    /// Returns `CadenceError::Overflow` if the product does not fit in `i128`.
    pub fn times_decimal(&self, value: Decimal) -> CadenceResult<Ratio> {
        self.times(&Ratio::from_decimal(value))
    }

    /// Shapes the ratio into a decimal with `scale` fractional digits.
    ///
    /// # Errors
    ///
    /// See [`RoundingPolicy::apply`].
    pub fn decimal_value(&self, scale: u32, policy: RoundingPolicy) -> CadenceResult<Decimal> {
        policy.apply(*self, scale)
    }
}

impl fmt::Display for Ratio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl From<Decimal> for Ratio {
    fn from(value: Decimal) -> Self {
        Ratio::from_decimal(value)
    }
}

/// Greatest common divisor (Euclid).
fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

/// Greatest common divisor of two non-zero reduced-ratio components.
fn gcd_i128(a: i128, b: i128) -> i128 {
    // Components of a reduced ratio with a positive denominator never hit
    // i128::MIN together, so the gcd fits.
    i128::try_from(gcd(a.unsigned_abs(), b.unsigned_abs())).unwrap_or(1)
}
