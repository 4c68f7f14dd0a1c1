pub mod error;
pub mod properties;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{Result, WorldError};
pub use store::WorldStore;

/// Per-world game config, holds `gamemode=`
pub const SERVER_PROPERTIES: &str = "server.properties";
/// Per-world licence acceptance file, holds `eula=`
pub const EULA_FILE: &str = "eula.txt";

pub const GAMEMODE_KEY: &str = "gamemode";
pub const EULA_KEY: &str = "eula";
