//! # Cadence Ext Text
//!
//! String column codecs for Cadence values.
//!
//! This crate provides default [`ColumnCodec`] implementations for storing
//! temporal quantities in a single text column:
//! - [`StringDurationCodec`]: `"<quantity> <unit>"`, e.g. `"3 hour"`
//! - [`StringTimeRateCodec`]: `"<amount> per <quantity> <unit>"`, e.g.
//!   `"12.50 per 1 day"`
//!
//! Unit names are always written in their canonical singular form; reading
//! also accepts plural names.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod duration;
mod time_rate;

pub use duration::StringDurationCodec;
pub use time_rate::StringTimeRateCodec;

pub use cadence_traits::ColumnCodec;
