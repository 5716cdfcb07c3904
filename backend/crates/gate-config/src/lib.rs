mod client_config;
mod config;
mod credentials_config;
mod error;
mod log_level;
mod logging_config;
mod server_config;
mod storage_config;

#[cfg(test)]
mod tests;

pub use client_config::ClientConfig;
pub use config::Config;
pub use credentials_config::CredentialsConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;
pub use server_config::ServerConfig;
pub use storage_config::StorageConfig;

pub const CONFIG_DIR_ENV: &str = "GATE_CONFIG_DIR";
pub const CONFIG_DIR_NAME: &str = ".gate";
pub const CONFIG_FILE_NAME: &str = "config.toml";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const MIN_PORT: u16 = 1024;
const DEFAULT_STORAGE_FILENAME: &str = "users.json";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8000";
const DEFAULT_SESSION_DIRECTORY: &str = "session";
