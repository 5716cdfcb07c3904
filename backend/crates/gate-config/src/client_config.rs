use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_SERVER_URL, DEFAULT_SESSION_DIRECTORY,
};

use std::path::Path;

use serde::Deserialize;

/// Settings for the `gate` command-line client
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub server_url: String,
    /// Session storage directory, relative to the config directory
    pub session_dir: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            server_url: String::from(DEFAULT_SERVER_URL),
            session_dir: String::from(DEFAULT_SESSION_DIRECTORY),
        }
    }
}

impl ClientConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.server_url.starts_with("http://") && !self.server_url.starts_with("https://") {
            return Err(ConfigError::client(format!(
                "client.server_url must start with http:// or https://, got {}",
                self.server_url
            )));
        }

        if self.session_dir.trim().is_empty()
            || Path::new(&self.session_dir).is_absolute()
            || self.session_dir.contains("..")
        {
            return Err(ConfigError::client(
                "client.session_dir must be a non-empty relative path without '..'",
            ));
        }

        Ok(())
    }
}
