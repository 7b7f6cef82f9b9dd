//! Daytime client configuration.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use cadence_traits::error::TraitError;

/// Shortest reply that still contains a full timestamp.
pub const MIN_BUFFER_SIZE: usize = 24;

/// Daytime client configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaytimeConfig {
    /// Server host name or address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Upper bound on connect plus read, in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum number of reply bytes read
    #[serde(default = "default_buffer_size")]
    pub buffer_size: usize,
}

fn default_host() -> String {
    "time.nist.gov".to_string()
}

fn default_port() -> u16 {
    13
}

fn default_timeout_ms() -> u64 {
    10_000
}

fn default_buffer_size() -> usize {
    256
}

impl Default for DaytimeConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            timeout_ms: default_timeout_ms(),
            buffer_size: default_buffer_size(),
        }
    }
}

impl DaytimeConfig {
    /// Configuration for `host:port` with every other field defaulted.
    pub fn for_server(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            ..Self::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TraitError> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "loading daytime configuration");
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, TraitError> {
        let config: Self =
            toml::from_str(content).map_err(|e| TraitError::ConfigError(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject settings no connection could work with.
    pub fn validate(&self) -> Result<(), TraitError> {
        if self.host.trim().is_empty() {
            return Err(TraitError::ConfigError("host must not be empty".into()));
        }
        if self.port == 0 {
            return Err(TraitError::ConfigError("port must be non-zero".into()));
        }
        if self.timeout_ms == 0 {
            return Err(TraitError::ConfigError("timeout_ms must be non-zero".into()));
        }
        if self.buffer_size < MIN_BUFFER_SIZE {
            return Err(TraitError::ConfigError(format!(
                "buffer_size {} is below the {MIN_BUFFER_SIZE} bytes of a timestamp",
                self.buffer_size
            )));
        }
        Ok(())
    }

    /// The timeout as a `std::time::Duration`.
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
