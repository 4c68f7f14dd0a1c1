use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_GAME_PROGRAM, DEFAULT_JAR, DEFAULT_STOP_DIRECTIVE,
};

use std::path::Path;

use serde::Deserialize;

/// Replaced with the absolute path of `jar` in `args` and `init_args`.
pub const JAR_PLACEHOLDER: &str = "{jar}";

/// How the game server executable is launched.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub program: String,
    /// Arguments for a normal server session
    pub args: Vec<String>,
    /// Arguments for the one-shot run that materializes a new world's config files
    pub init_args: Vec<String>,
    /// Server jar, relative to the root directory
    pub jar: String,
    /// Written to the server's stdin to request a graceful shutdown
    pub stop_directive: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            program: String::from(DEFAULT_GAME_PROGRAM),
            args: ["-Xmx1024M", "-Xms512M", "-jar", "{jar}", "--nogui"]
                .map(String::from)
                .to_vec(),
            init_args: [
                "-Xmx1024M",
                "-Xms512M",
                "-jar",
                "{jar}",
                "--nogui",
                "--initSettings",
            ]
            .map(String::from)
            .to_vec(),
            jar: String::from(DEFAULT_JAR),
            stop_directive: String::from(DEFAULT_STOP_DIRECTIVE),
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.program.trim().is_empty() {
            return Err(ConfigError::game("game.program must not be empty"));
        }

        if self.stop_directive.trim().is_empty() {
            return Err(ConfigError::game("game.stop_directive must not be empty"));
        }

        if self.stop_directive.contains('\n') {
            return Err(ConfigError::game(
                "game.stop_directive must be a single line",
            ));
        }

        Ok(())
    }

    /// Session arguments with the jar placeholder substituted.
    pub fn launch_args(&self, jar_path: &Path) -> Vec<String> {
        Self::substitute(&self.args, jar_path)
    }

    /// World-initialization arguments with the jar placeholder substituted.
    pub fn init_launch_args(&self, jar_path: &Path) -> Vec<String> {
        Self::substitute(&self.init_args, jar_path)
    }

    fn substitute(args: &[String], jar_path: &Path) -> Vec<String> {
        let jar = jar_path.to_string_lossy();
        args.iter()
            .map(|arg| arg.replace(JAR_PLACEHOLDER, &jar))
            .collect()
    }
}
