use crate::{
    BotConfig, CONFIG_DIR_NAME, CONFIG_FILENAME, ConfigError, ConfigErrorResult, GameConfig,
    LoggingConfig, ReadinessConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub game: GameConfig,
    pub readiness: ReadinessConfig,
    pub storage: StorageConfig,
    pub bot: BotConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Load config from the default config directory.
    ///
    /// Loading order:
    /// 1. Check for BB_CONFIG_DIR env var, else use ./.bb/
    /// 2. Auto-create config directory if it doesn't exist
    /// 3. Load config.toml if it exists, else use defaults
    /// 4. Apply BB_* (and PUBLIC_DNS) environment variable overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;
        Self::load_from(&config_dir)
    }

    /// Same as [`Config::load`] with an explicit config directory.
    pub fn load_from(config_dir: &Path) -> ConfigErrorResult<Self> {
        if !config_dir.exists() {
            std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.to_path_buf(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);

        let mut config = if config_path.exists() {
            Self::load_toml(&config_path)?
        } else {
            Config::default()
        };

        config.apply_env_overrides();

        Ok(config)
    }

    fn load_toml(path: &Path) -> ConfigErrorResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::Toml {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Get the config directory.
    /// Priority: BB_CONFIG_DIR env var > ./.bb/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("BB_CONFIG_DIR") {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir().map_err(ConfigError::working_dir)?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Directory that relative storage and jar paths resolve against.
    /// Priority: BB_ROOT_DIR env var > cwd
    pub fn root_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var("BB_ROOT_DIR") {
            return Ok(PathBuf::from(dir));
        }

        std::env::current_dir().map_err(ConfigError::working_dir)
    }

    /// Validate all configuration.
    /// Call after load() to catch all errors at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.game.validate()?;
        self.readiness.validate()?;
        self.storage.validate()?;
        self.bot.validate()?;

        if self.logging.retention == 0 {
            return Err(ConfigError::config("logging.retention must be >= 1"));
        }

        Ok(())
    }

    pub fn worlds_path(&self, root: &Path) -> PathBuf {
        root.join(&self.storage.worlds_dir)
    }

    pub fn log_file_path(&self, root: &Path) -> PathBuf {
        root.join(&self.storage.log_file)
    }

    pub fn jar_path(&self, root: &Path) -> PathBuf {
        let jar = Path::new(&self.game.jar);
        if jar.is_absolute() {
            jar.to_path_buf()
        } else {
            root.join(jar)
        }
    }

    /// Public address for the `address` command, if one is configured.
    pub fn public_address(&self) -> Option<&str> {
        self.bot
            .public_address
            .as_deref()
            .map(str::trim)
            .filter(|address| !address.is_empty())
    }

    /// Log configuration summary.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!(
            "  game: {} {} (jar: {})",
            self.game.program,
            self.game.args.join(" "),
            self.game.jar
        );
        info!(
            "  readiness: {}:{} every {}s",
            self.readiness.host, self.readiness.port, self.readiness.poll_interval_secs
        );
        info!(
            "  storage: worlds={}, session log={}",
            self.storage.worlds_dir, self.storage.log_file
        );
        info!(
            "  bot: prefix={:?}, address={}, shutdown timeout={}s",
            self.bot.command_prefix,
            self.public_address().unwrap_or("<unset>"),
            self.bot.shutdown_timeout_secs
        );
        info!(
            "  logging: {} (dir: {}, keep {} files)",
            *self.logging.level, self.logging.dir, self.logging.retention
        );
    }

    fn apply_env_overrides(&mut self) {
        // Game
        Self::apply_env_string("BB_GAME_PROGRAM", &mut self.game.program);
        Self::apply_env_string("BB_GAME_JAR", &mut self.game.jar);
        Self::apply_env_string("BB_GAME_STOP_DIRECTIVE", &mut self.game.stop_directive);

        // Readiness
        Self::apply_env_string("BB_READINESS_HOST", &mut self.readiness.host);
        Self::apply_env_parse("BB_READINESS_PORT", &mut self.readiness.port);
        Self::apply_env_parse(
            "BB_READINESS_POLL_INTERVAL_SECS",
            &mut self.readiness.poll_interval_secs,
        );
        Self::apply_env_parse(
            "BB_READINESS_CONNECT_TIMEOUT_MS",
            &mut self.readiness.connect_timeout_ms,
        );

        // Storage
        Self::apply_env_string("BB_WORLDS_DIR", &mut self.storage.worlds_dir);
        Self::apply_env_string("BB_LOG_FILE", &mut self.storage.log_file);

        // Bot
        Self::apply_env_string("BB_COMMAND_PREFIX", &mut self.bot.command_prefix);
        Self::apply_env_option_string("PUBLIC_DNS", &mut self.bot.public_address);
        Self::apply_env_option_string("BB_PUBLIC_ADDRESS", &mut self.bot.public_address);
        Self::apply_env_parse(
            "BB_SHUTDOWN_TIMEOUT_SECS",
            &mut self.bot.shutdown_timeout_secs,
        );

        // Logging
        Self::apply_env_parse("BB_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_string("BB_LOG_DIR", &mut self.logging.dir);
        Self::apply_env_parse("BB_LOG_RETENTION", &mut self.logging.retention);
        Self::apply_env_bool("BB_LOG_COLORED", &mut self.logging.colored);
    }

    /// Helper: Apply environment variable override for String values
    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Helper: Apply environment variable override for bool values (accepts "true"/"1")
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Helper: Apply environment variable override for parseable values
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    /// Helper: Apply environment variable override for Option<String> values
    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
