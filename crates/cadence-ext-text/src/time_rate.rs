//! Time rate column codec.

use cadence_core::types::{Duration, TimeRate};
use cadence_traits::codec::ColumnCodec;
use cadence_traits::error::TraitError;

use crate::duration::StringDurationCodec;

const SEPARATOR: &str = " per ";

/// Stores a [`TimeRate`] as `"<amount> per <quantity> <unit>"`.
///
/// The amount keeps its scale, so `12.50 per 1 day` reads back as the
/// same rate rather than `12.5 per 1 day`.
#[derive(Debug, Clone, Copy, Default)]
pub struct StringTimeRateCodec;

impl ColumnCodec<TimeRate> for StringTimeRateCodec {
    fn to_column(&self, value: &TimeRate) -> String {
        format!(
            "{}{SEPARATOR}{}",
            value.quantity(),
            StringDurationCodec.to_column(&value.unit())
        )
    }

    fn from_column(&self, column: &str) -> Result<TimeRate, TraitError> {
        let (quantity, unit) = column.split_once(SEPARATOR).ok_or_else(|| {
            tracing::debug!(column, "time rate column without separator");
            TraitError::ParseError(format!(
                "expected \"<amount> per <quantity> <unit>\", got {column:?}"
            ))
        })?;
        let unit: Duration = StringDurationCodec.from_column(unit)?;
        Ok(TimeRate::parse(quantity, unit)?)
    }
}
