//! Value types for exact temporal arithmetic.
//!
//! - [`TimeUnit`]: units of time and their families
//! - [`Duration`]: a quantity of a time unit
//! - [`Ratio`]: exact rational hand-off between division and rounding
//! - [`RoundingPolicy`]: how inexact values are shaped into decimals
//! - [`TimeRate`]: an amount per unit of time

mod duration;
mod ratio;
mod rounding;
mod time_rate;
mod time_unit;

pub use duration::Duration;
pub use ratio::Ratio;
pub use rounding::RoundingPolicy;
pub use time_rate::TimeRate;
pub use time_unit::{TimeUnit, TimeUnitFamily};
