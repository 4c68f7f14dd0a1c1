use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COMMAND_PREFIX, DEFAULT_SHUTDOWN_TIMEOUT_SECS,
};

use std::time::Duration;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BotConfig {
    /// Messages must start with this to be treated as commands
    pub command_prefix: String,
    /// Reported verbatim by the `address` command
    pub public_address: Option<String>,
    /// How long to wait for a graceful stop when the bot itself shuts down
    pub shutdown_timeout_secs: u64,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            command_prefix: String::from(DEFAULT_COMMAND_PREFIX),
            public_address: None,
            shutdown_timeout_secs: DEFAULT_SHUTDOWN_TIMEOUT_SECS,
        }
    }
}

impl BotConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.command_prefix.trim().is_empty() {
            return Err(ConfigError::bot("bot.command_prefix must not be empty"));
        }

        if let Some(address) = &self.public_address
            && address.trim().is_empty()
        {
            return Err(ConfigError::bot(
                "bot.public_address must not be blank; leave it unset instead",
            ));
        }

        if self.shutdown_timeout_secs == 0 {
            return Err(ConfigError::bot("bot.shutdown_timeout_secs must be >= 1"));
        }

        Ok(())
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown_timeout_secs)
    }
}
