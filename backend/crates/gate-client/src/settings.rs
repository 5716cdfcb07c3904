use crate::CommandResult;

use gate_config::Config;

use std::path::PathBuf;

/// Where the client talks to and where it keeps its session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub server_url: String,
    pub session_dir: PathBuf,
}

impl ClientSettings {
    /// Command-line flags win over configuration
    pub fn resolve(
        server: Option<String>,
        session_dir: Option<PathBuf>,
        config: &Config,
    ) -> CommandResult<Self> {
        let server_url = server.unwrap_or_else(|| config.client.server_url.clone());
        let session_dir = match session_dir {
            Some(dir) => dir,
            None => config.session_dir()?,
        };

        Ok(Self {
            server_url,
            session_dir,
        })
    }
}
