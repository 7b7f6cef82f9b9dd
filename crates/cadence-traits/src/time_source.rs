//! Sources of the current instant.
//!
//! A [`TimeSource`] answers a single question, "what time is it now?".
//! Implementations range from a network clock to a fixed instant in tests.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::error::TraitError;

/// Trait for providers of the current UTC instant.
#[async_trait]
pub trait TimeSource: Send + Sync {
    /// Current instant according to this source.
    async fn now(&self) -> Result<DateTime<Utc>, TraitError>;
}

/// A source that always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedTimeSource {
    instant: DateTime<Utc>,
}

impl FixedTimeSource {
    /// Create a source frozen at `instant`.
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self { instant }
    }
}

#[async_trait]
impl TimeSource for FixedTimeSource {
    async fn now(&self) -> Result<DateTime<Utc>, TraitError> {
        Ok(self.instant)
    }
}
