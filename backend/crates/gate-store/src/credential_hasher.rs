//! Password hashing built around Argon2id.
//!
//! Parameters are fixed per process (taken from configuration) so every hash
//! produced by one deployment has the same cost. The PHC string stores salt
//! and parameters, so verification keeps working if the configured cost
//! changes later.

use crate::{Result as StoreErrorResult, StoreError};

use argon2::password_hash::SaltString;
use argon2::password_hash::rand_core::OsRng;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};

/// Argon2id memory cost in KiB (19 MiB)
pub const DEFAULT_MEMORY_COST_KIB: u32 = 19 * 1024;
pub const DEFAULT_TIME_COST: u32 = 3;
pub const DEFAULT_PARALLELISM: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingParams {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingParams {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_MEMORY_COST_KIB,
            iterations: DEFAULT_TIME_COST,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CredentialHasher {
    params: Params,
}

impl CredentialHasher {
    /// Build a hasher, rejecting parameters Argon2 would not accept
    pub fn new(params: HashingParams) -> StoreErrorResult<Self> {
        let params = Params::new(
            params.memory_kib,
            params.iterations,
            params.parallelism,
            None,
        )
        .map_err(|e| StoreError::hashing(format!("invalid Argon2 parameters: {e}")))?;

        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }

    /// Hash with a fresh random salt and return the PHC string
    pub fn hash(&self, plaintext: &str) -> StoreErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = self
            .argon2()
            .hash_password(plaintext.as_bytes(), &salt)
            .map_err(|e| StoreError::hashing(e.to_string()))?;

        Ok(hash.to_string())
    }

    /// Constant-time comparison against a stored PHC string.
    ///
    /// A stored value that does not parse as a PHC string never matches.
    pub fn verify(&self, plaintext: &str, stored_hash: &str) -> bool {
        let parsed = match PasswordHash::new(stored_hash) {
            Ok(hash) => hash,
            Err(_) => return false,
        };

        self.argon2()
            .verify_password(plaintext.as_bytes(), &parsed)
            .is_ok()
    }
}
