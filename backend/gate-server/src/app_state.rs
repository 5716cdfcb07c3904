use crate::error::Result as ServerErrorResult;

use gate_config::Config;
use gate_store::{CredentialHasher, CredentialService, HashingParams, RecordStore};

use std::sync::Arc;

/// Shared state for the auth handlers
#[derive(Clone)]
pub struct AppState {
    pub credentials: Arc<CredentialService>,
    /// Registration-time password floor, in characters
    pub min_password_length: usize,
}

impl AppState {
    pub fn new(credentials: Arc<CredentialService>, min_password_length: usize) -> Self {
        Self {
            credentials,
            min_password_length,
        }
    }

    /// Wire the credential service from loaded configuration.
    ///
    /// Does not validate `config`; Argon2 still rejects parameters it cannot
    /// run with.
    pub fn from_config(config: &Config) -> ServerErrorResult<Self> {
        let hasher = CredentialHasher::new(HashingParams {
            memory_kib: config.credentials.hash_memory_kib,
            iterations: config.credentials.hash_iterations,
            parallelism: config.credentials.hash_parallelism,
        })?;

        let store = RecordStore::new(config.storage_path()?);
        let credentials = Arc::new(CredentialService::new(store, hasher));

        Ok(Self::new(credentials, config.credentials.min_password_length))
    }
}
