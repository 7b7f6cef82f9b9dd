//! # Cadence Core
//!
//! Exact temporal quantities, rate-based derivations, and annual recurrence
//! rules.
//!
//! This crate provides:
//!
//! - **Types**: [`Duration`] in mixed time units, exact [`Ratio`]s, [`TimeRate`]s
//!   and the [`RoundingPolicy`] that is the single source of precision decisions
//! - **Calendar**: day-granularity dates, months and half-open intervals
//! - **Recurrence**: the [`DateSpecification`] contract and its once-a-year
//!   instantiation, [`AnnualDateSpecification`]
//!
//! ## Design Philosophy
//!
//! - **Exact by default**: division yields a [`Ratio`]; decimals only appear
//!   after an explicit rounding policy (or an exactness assertion)
//! - **Immutable values**: everything is constructed once and never mutated
//! - **Fail loudly**: cross-family unit mixing and inexact results are errors,
//!   never silent approximations
//!
//! ## Example
//!
//! ```rust
//! use cadence_core::prelude::*;
//! use rust_decimal_macros::dec;
//!
//! let rate = TimeRate::new(dec!(1000), Duration::hours(1)).unwrap();
//! assert_eq!(rate.over(&Duration::hours(3)).unwrap(), dec!(3000));
//!
//! let new_year = AnnualDateSpecification::fixed(1, 1).unwrap();
//! let span = CalendarInterval::years(2024, 2).unwrap();
//! assert_eq!(new_year.iterate_over(&span).count(), 2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::trivially_copy_pass_by_ref)]

pub mod calendar;
pub mod error;
pub mod recurrence;
pub mod types;

#[cfg(test)]
mod validation_tests;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendar::{CalendarDate, CalendarInterval, CalendarMonth, DateRange};
    pub use crate::error::{CadenceError, CadenceResult};
    pub use crate::recurrence::{AnnualDateSpecification, DateSpecification, Occurrences};
    pub use crate::types::{Duration, Ratio, RoundingPolicy, TimeRate, TimeUnit, TimeUnitFamily};
}

// Re-export commonly used types at crate root
pub use calendar::{CalendarDate, CalendarInterval};
pub use error::{CadenceError, CadenceResult};
pub use recurrence::{AnnualDateSpecification, DateSpecification};
pub use types::{Duration, Ratio, RoundingPolicy, TimeRate, TimeUnit};
