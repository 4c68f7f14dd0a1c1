use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONNECT_TIMEOUT_MS, DEFAULT_POLL_INTERVAL_SECS,
    DEFAULT_READINESS_HOST, DEFAULT_READINESS_PORT, MAX_POLL_INTERVAL_SECS,
    MIN_POLL_INTERVAL_SECS,
};

use std::time::Duration;

use serde::Deserialize;

/// Where and how often to probe for the game server's listening port.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ReadinessConfig {
    pub host: String,
    pub port: u16,
    pub poll_interval_secs: u64,
    pub connect_timeout_ms: u64,
}

impl Default for ReadinessConfig {
    fn default() -> Self {
        Self {
            host: String::from(DEFAULT_READINESS_HOST),
            port: DEFAULT_READINESS_PORT,
            poll_interval_secs: DEFAULT_POLL_INTERVAL_SECS,
            connect_timeout_ms: DEFAULT_CONNECT_TIMEOUT_MS,
        }
    }
}

impl ReadinessConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::readiness("readiness.host must not be empty"));
        }

        if self.port == 0 {
            return Err(ConfigError::readiness("readiness.port must be non-zero"));
        }

        if !(MIN_POLL_INTERVAL_SECS..=MAX_POLL_INTERVAL_SECS).contains(&self.poll_interval_secs) {
            return Err(ConfigError::readiness(format!(
                "readiness.poll_interval_secs must be {}-{}, got {}",
                MIN_POLL_INTERVAL_SECS, MAX_POLL_INTERVAL_SECS, self.poll_interval_secs
            )));
        }

        if self.connect_timeout_ms == 0 {
            return Err(ConfigError::readiness(
                "readiness.connect_timeout_ms must be non-zero",
            ));
        }

        Ok(())
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_millis(self.connect_timeout_ms)
    }
}
