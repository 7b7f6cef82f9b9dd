//! # Cadence Ext Daytime
//!
//! Network time for Cadence over the daytime protocol (RFC 867).
//!
//! This crate provides:
//! - [`DaytimeClient`]: a [`TimeSource`](cadence_traits::TimeSource) that
//!   asks a NIST-style daytime server for the current UTC instant
//! - [`DaytimeConfig`]: server, timeout and buffer settings, loadable from TOML
//!
//! Each `now()` call opens its own connection and is bounded by the
//! configured timeout.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod client;
mod config;

pub use client::{parse_daytime_response, DaytimeClient};
pub use config::{DaytimeConfig, MIN_BUFFER_SIZE};
