//! Daytime protocol client.
//!
//! The server writes one line and closes the connection. NIST servers use a
//! fixed layout, with the UTC date and time at byte offsets 7 through 23:
//!
//! ```text
//! \n60000 23-02-25 17:04:05 00 0 0 123.4 UTC(NIST) *
//! ```

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;

use cadence_traits::error::TraitError;
use cadence_traits::time_source::TimeSource;

use crate::config::DaytimeConfig;

const TIMESTAMP_FORMAT: &str = "%y-%m-%d %H:%M:%S";
const TIMESTAMP_START: usize = 7;
const TIMESTAMP_END: usize = 24;

/// Network [`TimeSource`] backed by a daytime (RFC 867) server.
#[derive(Debug, Clone)]
pub struct DaytimeClient {
    config: DaytimeConfig,
}

impl DaytimeClient {
    /// Create a client from a validated configuration.
    pub fn new(config: DaytimeConfig) -> Result<Self, TraitError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Create a client for `time.nist.gov:13`.
    pub fn nist() -> Self {
        Self {
            config: DaytimeConfig::default(),
        }
    }

    /// The client configuration.
    pub fn config(&self) -> &DaytimeConfig {
        &self.config
    }

    /// Read the raw reply of the server, bounded by the configured timeout.
    pub async fn fetch(&self) -> Result<String, TraitError> {
        let config = &self.config;
        tokio::time::timeout(config.timeout(), self.read_reply())
            .await
            .map_err(|_| {
                tracing::warn!(
                    host = %config.host,
                    port = config.port,
                    timeout_ms = config.timeout_ms,
                    "daytime request timed out"
                );
                TraitError::Timeout
            })?
    }

    async fn read_reply(&self) -> Result<String, TraitError> {
        let config = &self.config;
        tracing::debug!(host = %config.host, port = config.port, "connecting to daytime server");

        let stream = TcpStream::connect((config.host.as_str(), config.port))
            .await
            .map_err(|e| {
                TraitError::ConnectionFailed(format!("{}:{}: {e}", config.host, config.port))
            })?;

        let mut buffer = Vec::with_capacity(config.buffer_size);
        stream
            .take(config.buffer_size as u64)
            .read_to_end(&mut buffer)
            .await?;

        let reply = String::from_utf8_lossy(&buffer).into_owned();
        tracing::debug!(bytes = buffer.len(), reply = %reply.trim(), "daytime reply");
        Ok(reply)
    }
}

#[async_trait]
impl TimeSource for DaytimeClient {
    async fn now(&self) -> Result<DateTime<Utc>, TraitError> {
        let reply = self.fetch().await?;
        parse_daytime_response(&reply).map_err(|e| {
            tracing::warn!(error = %e, "unreadable daytime reply");
            e
        })
    }
}

/// Parse the UTC instant out of a NIST-format daytime reply.
///
/// Only bytes 7 through 23 (`yy-mm-dd HH:MM:SS`) are read; two-digit years
/// 00-68 fall in the 2000s.
pub fn parse_daytime_response(reply: &str) -> Result<DateTime<Utc>, TraitError> {
    let gist = reply.get(TIMESTAMP_START..TIMESTAMP_END).ok_or_else(|| {
        TraitError::ParseError(format!("daytime reply too short: {reply:?}"))
    })?;
    let naive = NaiveDateTime::parse_from_str(gist, TIMESTAMP_FORMAT)
        .map_err(|e| TraitError::ParseError(format!("daytime timestamp {gist:?}: {e}")))?;
    Ok(Utc.from_utc_datetime(&naive))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    const NIST_REPLY: &str = "\n60000 23-02-25 17:04:05 00 0 0 123.4 UTC(NIST) * \n";

    #[test]
    fn test_parse_nist_reply() {
        let instant = parse_daytime_response(NIST_REPLY).unwrap();
        assert_eq!(instant, Utc.with_ymd_and_hms(2023, 2, 25, 17, 4, 5).unwrap());
    }

    #[test]
    fn test_parse_ignores_trailing_fields() {
        let instant = parse_daytime_response("\n12345 99-12-31 23:59:59").unwrap();
        assert_eq!(instant.year(), 1999);
        assert_eq!(instant.second(), 59);
    }

    #[test]
    fn test_parse_rejects_short_reply() {
        assert!(matches!(
            parse_daytime_response("\n60000 23-02-25"),
            Err(TraitError::ParseError(_))
        ));
        assert!(parse_daytime_response("").is_err());
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            parse_daytime_response("\n60000 23-13-25 17:04:05 00 0 0"),
            Err(TraitError::ParseError(_))
        ));
        assert!(parse_daytime_response("Tuesday, February 25, 2023 17:04:05-UTC").is_err());
    }

    #[test]
    fn test_new_validates_config() {
        assert!(DaytimeClient::new(DaytimeConfig::for_server("localhost", 0)).is_err());
        let client = DaytimeClient::new(DaytimeConfig::for_server("localhost", 1313)).unwrap();
        assert_eq!(client.config().port, 1313);
        assert_eq!(DaytimeClient::nist().config().host, "time.nist.gov");
    }
}
