use crate::{
    CONFIG_DIR_ENV, CONFIG_DIR_NAME, CONFIG_FILE_NAME, ClientConfig, ConfigError,
    ConfigErrorResult, CredentialsConfig, LoggingConfig, ServerConfig, StorageConfig,
};

use std::path::{Path, PathBuf};

use log::info;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub credentials: CredentialsConfig,
    pub logging: LoggingConfig,
    pub client: ClientConfig,
}

impl Config {
    /// Load config.
    ///
    /// Loading order:
    /// 1. GATE_CONFIG_DIR env var, else ./.gate/
    /// 2. Create the config directory if missing
    /// 3. Read config.toml if present, else defaults
    /// 4. Apply GATE_* environment overrides
    ///
    /// Does NOT validate - call validate() after load().
    pub fn load() -> ConfigErrorResult<Self> {
        let config_dir = Self::config_dir()?;

        if !config_dir.exists() {
            std::fs::create_dir_all(&config_dir).map_err(|e| ConfigError::Io {
                path: config_dir.clone(),
                source: e,
            })?;
        }

        let config_path = config_dir.join(CONFIG_FILE_NAME);

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

    /// Priority: GATE_CONFIG_DIR env var > ./.gate/ (relative to cwd)
    pub fn config_dir() -> ConfigErrorResult<PathBuf> {
        if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
            return Ok(PathBuf::from(dir));
        }

        let cwd = std::env::current_dir()
            .map_err(|_| ConfigError::config("Cannot determine current working directory"))?;
        Ok(cwd.join(CONFIG_DIR_NAME))
    }

    /// Validate all sections. Call after load() to fail fast at startup.
    pub fn validate(&self) -> ConfigErrorResult<()> {
        self.server.validate()?;
        self.storage.validate()?;
        self.credentials.validate()?;
        self.client.validate()?;
        Ok(())
    }

    /// Absolute path to the user document.
    pub fn storage_path(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.storage.path))
    }

    /// Absolute path to the client session directory.
    pub fn session_dir(&self) -> ConfigErrorResult<PathBuf> {
        Ok(Self::config_dir()?.join(&self.client.session_dir))
    }

    /// Log file path, if file logging is configured.
    pub fn log_file_path(&self) -> ConfigErrorResult<Option<PathBuf>> {
        match self.logging.file {
            Some(ref filename) => {
                let log_dir = Self::config_dir()?.join(&self.logging.dir);
                Ok(Some(log_dir.join(filename)))
            }
            None => Ok(None),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Log the effective configuration.
    pub fn log_summary(&self) {
        info!("Configuration loaded:");
        info!("  server: {}:{}", self.server.host, self.server.port);
        info!("  storage: {}", self.storage.path);
        info!(
            "  credentials: min_password_length={}, argon2 m={}KiB t={} p={}",
            self.credentials.min_password_length,
            self.credentials.hash_memory_kib,
            self.credentials.hash_iterations,
            self.credentials.hash_parallelism
        );
        info!(
            "  logging: {} (colored: {}, file: {})",
            *self.logging.level,
            self.logging.colored,
            self.logging.file.as_deref().unwrap_or("stdout")
        );
    }

    fn apply_env_overrides(&mut self) {
        // Server
        Self::apply_env_string("GATE_SERVER_HOST", &mut self.server.host);
        Self::apply_env_parse("GATE_SERVER_PORT", &mut self.server.port);

        // Storage
        Self::apply_env_string("GATE_STORAGE_PATH", &mut self.storage.path);

        // Credentials
        Self::apply_env_parse(
            "GATE_MIN_PASSWORD_LENGTH",
            &mut self.credentials.min_password_length,
        );
        Self::apply_env_parse("GATE_HASH_MEMORY_KIB", &mut self.credentials.hash_memory_kib);
        Self::apply_env_parse("GATE_HASH_ITERATIONS", &mut self.credentials.hash_iterations);
        Self::apply_env_parse(
            "GATE_HASH_PARALLELISM",
            &mut self.credentials.hash_parallelism,
        );

        // Logging
        Self::apply_env_parse("GATE_LOG_LEVEL", &mut self.logging.level);
        Self::apply_env_bool("GATE_LOG_COLORED", &mut self.logging.colored);
        Self::apply_env_option_string("GATE_LOG_FILE", &mut self.logging.file);

        // Client
        Self::apply_env_string("GATE_CLIENT_SERVER_URL", &mut self.client.server_url);
        Self::apply_env_string("GATE_CLIENT_SESSION_DIR", &mut self.client.session_dir);
    }

    fn apply_env_string(var_name: &str, target: &mut String) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val;
        }
    }

    /// Accepts "true"/"1"; anything else is false
    fn apply_env_bool(var_name: &str, target: &mut bool) {
        if let Ok(val) = std::env::var(var_name) {
            *target = val == "true" || val == "1";
        }
    }

    /// Unparseable values are ignored
    fn apply_env_parse<T: std::str::FromStr>(var_name: &str, target: &mut T) {
        if let Ok(val) = std::env::var(var_name)
            && let Ok(parsed) = val.parse()
        {
            *target = parsed;
        }
    }

    fn apply_env_option_string(var_name: &str, target: &mut Option<String>) {
        if let Ok(val) = std::env::var(var_name) {
            *target = Some(val);
        }
    }
}
