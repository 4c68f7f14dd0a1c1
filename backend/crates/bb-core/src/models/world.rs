//! World entity - one save directory under the worlds root.

/// Mode reported for a world whose config has no readable `gamemode`.
pub const UNKNOWN_MODE: &str = "unknown";

const MAX_WORLD_NAME_LEN: usize = 64;

/// A world as discovered on disk. The mode is whatever the world's
/// server.properties says, which may be outside the modes `create` offers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct World {
    pub name: String,
    pub mode: String,
}

impl World {
    pub fn new(name: impl Into<String>, mode: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mode: mode.into(),
        }
    }

    /// World names become directory names: ASCII letters, digits, '-' and '_' only.
    pub fn is_valid_name(name: &str) -> bool {
        !name.is_empty()
            && name.len() <= MAX_WORLD_NAME_LEN
            && name
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    }
}
