//! Duration column codec.

use cadence_core::types::Duration;
use cadence_traits::codec::ColumnCodec;
use cadence_traits::error::TraitError;

/// Stores a [`Duration`] as `"<quantity> <unit>"`.
///
/// ```rust
/// use cadence_core::types::Duration;
/// use cadence_ext_text::{ColumnCodec, StringDurationCodec};
///
/// let codec = StringDurationCodec;
/// assert_eq!(codec.to_column(&Duration::hours(3)), "3 hour");
/// assert_eq!(codec.from_column("3 hour").unwrap(), Duration::hours(3));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct StringDurationCodec;

impl ColumnCodec<Duration> for StringDurationCodec {
    fn to_column(&self, value: &Duration) -> String {
        format!("{} {}", value.quantity(), value.unit().name())
    }

    fn from_column(&self, column: &str) -> Result<Duration, TraitError> {
        column.parse::<Duration>().map_err(|e| {
            tracing::debug!(column, error = %e, "unreadable duration column");
            TraitError::from(e)
        })
    }
}
