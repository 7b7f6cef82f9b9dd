//! # Cadence Traits
//!
//! Trait definitions for the seams between Cadence and the outside world.
//!
//! This crate contains ONLY trait definitions and their shared error type.
//! All implementations are in separate extension crates.
//!
//! ## Module Structure
//!
//! - [`time_source`]: Traits for sources of the current instant (network clocks)
//! - [`codec`]: Traits for encoding values into single storage columns
//! - [`error`]: The error type every implementation reports through

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
pub mod error;
pub mod time_source;

// Re-export commonly used types
pub use codec::ColumnCodec;
pub use error::TraitError;
pub use time_source::{FixedTimeSource, TimeSource};
