//! Column codecs.
//!
//! A [`ColumnCodec`] maps a value onto the text of a single storage column
//! and back. Absent values map to SQL-style `NULL` through the nullable
//! helpers, which every codec gets for free.

use crate::error::TraitError;

/// Trait for encoding values of `T` as a single text column.
///
/// Implementations must round-trip: `from_column(&to_column(v)) == v`.
pub trait ColumnCodec<T> {
    /// Encode a value.
    fn to_column(&self, value: &T) -> String;

    /// Decode a column written by [`ColumnCodec::to_column`].
    fn from_column(&self, column: &str) -> Result<T, TraitError>;

    /// Encode an optional value; `None` stays `None`.
    fn to_nullable_column(&self, value: Option<&T>) -> Option<String> {
        value.map(|v| self.to_column(v))
    }

    /// Decode an optional column; `None` stays `None`.
    fn from_nullable_column(&self, column: Option<&str>) -> Result<Option<T>, TraitError> {
        column.map(|c| self.from_column(c)).transpose()
    }
}
