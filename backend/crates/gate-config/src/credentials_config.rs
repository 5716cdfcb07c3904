use crate::{ConfigError, ConfigErrorResult};

use serde::Deserialize;

pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 128;
pub const DEFAULT_MIN_PASSWORD_LENGTH: usize = 6;

/// Argon2 requires at least 8 KiB per lane
pub const MIN_HASH_MEMORY_KIB_PER_LANE: u32 = 8;
pub const MAX_HASH_MEMORY_KIB: u32 = 1024 * 1024;
pub const DEFAULT_HASH_MEMORY_KIB: u32 = 19 * 1024;

pub const MIN_HASH_ITERATIONS: u32 = 1;
pub const MAX_HASH_ITERATIONS: u32 = 32;
pub const DEFAULT_HASH_ITERATIONS: u32 = 3;

pub const MIN_HASH_PARALLELISM: u32 = 1;
pub const MAX_HASH_PARALLELISM: u32 = 64;
pub const DEFAULT_HASH_PARALLELISM: u32 = 1;

/// Password policy and hashing cost.
///
/// The hashing parameters apply to newly created hashes only; stored hashes
/// carry their own parameters.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CredentialsConfig {
    /// Minimum password length at registration, in characters
    pub min_password_length: usize,
    /// Argon2 memory cost in KiB
    pub hash_memory_kib: u32,
    /// Argon2 time cost
    pub hash_iterations: u32,
    /// Argon2 lanes
    pub hash_parallelism: u32,
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            min_password_length: DEFAULT_MIN_PASSWORD_LENGTH,
            hash_memory_kib: DEFAULT_HASH_MEMORY_KIB,
            hash_iterations: DEFAULT_HASH_ITERATIONS,
            hash_parallelism: DEFAULT_HASH_PARALLELISM,
        }
    }
}

impl CredentialsConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.min_password_length < MIN_PASSWORD_LENGTH
            || self.min_password_length > MAX_PASSWORD_LENGTH
        {
            return Err(ConfigError::credentials(format!(
                "credentials.min_password_length must be {}-{}, got {}",
                MIN_PASSWORD_LENGTH, MAX_PASSWORD_LENGTH, self.min_password_length
            )));
        }

        if self.hash_parallelism < MIN_HASH_PARALLELISM
            || self.hash_parallelism > MAX_HASH_PARALLELISM
        {
            return Err(ConfigError::credentials(format!(
                "credentials.hash_parallelism must be {}-{}, got {}",
                MIN_HASH_PARALLELISM, MAX_HASH_PARALLELISM, self.hash_parallelism
            )));
        }

        if self.hash_iterations < MIN_HASH_ITERATIONS
            || self.hash_iterations > MAX_HASH_ITERATIONS
        {
            return Err(ConfigError::credentials(format!(
                "credentials.hash_iterations must be {}-{}, got {}",
                MIN_HASH_ITERATIONS, MAX_HASH_ITERATIONS, self.hash_iterations
            )));
        }

        let min_memory = MIN_HASH_MEMORY_KIB_PER_LANE * self.hash_parallelism;
        if self.hash_memory_kib < min_memory || self.hash_memory_kib > MAX_HASH_MEMORY_KIB {
            return Err(ConfigError::credentials(format!(
                "credentials.hash_memory_kib must be {}-{} for {} lane(s), got {}",
                min_memory, MAX_HASH_MEMORY_KIB, self.hash_parallelism, self.hash_memory_kib
            )));
        }

        Ok(())
    }
}
