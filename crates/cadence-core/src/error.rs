//! Error types for the Cadence library.
//!
//! Every fallible operation in the core returns [`CadenceResult`]. Failures
//! are synchronous and propagate straight to the caller; nothing here retries
//! or falls back.

use thiserror::Error;

use crate::types::TimeUnit;

/// A specialized Result type for Cadence operations.
pub type CadenceResult<T> = Result<T, CadenceError>;

/// The main error type for Cadence operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CadenceError {
    /// A required input was absent (empty string, missing field).
    #[error("Missing argument: {name}")]
    MissingArgument {
        /// Name of the missing argument.
        name: String,
    },

    /// Units from different families (millisecond-based vs month-based)
    /// were combined.
    #[error("Incompatible units: cannot combine {from} with {to}")]
    IncompatibleUnit {
        /// Unit of the left-hand operand.
        from: TimeUnit,
        /// Unit of the right-hand operand.
        to: TimeUnit,
    },

    /// Exactness was required but the value does not terminate at the
    /// requested scale. Callers must pick an explicit rounding policy.
    #[error("Inexact division: {value} cannot be represented exactly with scale {scale}")]
    InexactDivision {
        /// The exact value that could not be represented.
        value: String,
        /// Requested number of fractional digits.
        scale: u32,
    },

    /// An occurrence sequence was advanced past its last element.
    #[error("Iterator exhausted: no further occurrences")]
    IteratorExhausted,

    /// Division by a zero-length quantity.
    #[error("Division by zero: {context}")]
    DivisionByZero {
        /// What was being divided.
        context: String,
    },

    /// A duration subtraction would go below zero.
    #[error("Negative duration: {minuend} minus {subtrahend}")]
    NegativeDuration {
        /// Rendered left-hand operand.
        minuend: String,
        /// Rendered right-hand operand.
        subtrahend: String,
    },

    /// Scale outside the range a `Decimal` can carry.
    #[error("Invalid scale: {scale} (maximum is 28)")]
    InvalidScale {
        /// The rejected scale.
        scale: u32,
    },

    /// Exact arithmetic overflowed its representation.
    #[error("Arithmetic overflow: {context}")]
    Overflow {
        /// The operation that overflowed.
        context: String,
    },

    /// Invalid calendar value.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A decimal quantity could not be parsed or represented.
    #[error("Invalid number: {input}")]
    InvalidNumber {
        /// The offending input.
        input: String,
    },

    /// Unknown time unit name.
    #[error("Unknown time unit: {name}")]
    UnknownTimeUnit {
        /// The unrecognised name.
        name: String,
    },

    /// A duration string did not match `"<quantity> <unit>"`.
    #[error("Invalid duration: {input}")]
    InvalidDuration {
        /// The offending input.
        input: String,
    },
}

impl CadenceError {
    /// Creates a missing argument error.
    #[must_use]
    pub fn missing_argument(name: impl Into<String>) -> Self {
        Self::MissingArgument { name: name.into() }
    }

    /// Creates an incompatible unit error.
    #[must_use]
    pub fn incompatible_unit(from: TimeUnit, to: TimeUnit) -> Self {
        Self::IncompatibleUnit { from, to }
    }

    /// Creates an inexact division error.
    #[must_use]
    pub fn inexact_division(value: impl ToString, scale: u32) -> Self {
        Self::InexactDivision {
            value: value.to_string(),
            scale,
        }
    }

    /// Creates a division by zero error.
    #[must_use]
    pub fn division_by_zero(context: impl Into<String>) -> Self {
        Self::DivisionByZero {
            context: context.into(),
        }
    }

    /// Creates an overflow error.
    #[must_use]
    pub fn overflow(context: impl Into<String>) -> Self {
        Self::Overflow {
            context: context.into(),
        }
    }

    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid number error.
    #[must_use]
    pub fn invalid_number(input: impl Into<String>) -> Self {
        Self::InvalidNumber {
            input: input.into(),
        }
    }

    /// Creates an invalid duration error.
    #[must_use]
    pub fn invalid_duration(input: impl Into<String>) -> Self {
        Self::InvalidDuration {
            input: input.into(),
        }
    }

    /// Returns true if the caller should retry with an explicit rounding policy.
    #[must_use]
    pub fn requires_rounding(&self) -> bool {
        matches!(self, Self::InexactDivision { .. })
    }
}
