pub mod app;
pub mod cli;
pub mod error;
pub mod logger;
pub mod transport;

#[cfg(test)]
mod tests;

pub use error::{BotError, Result as BotErrorResult};

/// Prefix of the bot's own rotated log files
pub const LOG_FILE_PREFIX: &str = "bb-bot";
/// Capacity of the request and response queues
pub const CHANNEL_CAPACITY: usize = 16;
