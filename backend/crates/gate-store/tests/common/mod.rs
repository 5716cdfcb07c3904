#![allow(dead_code)]

//! Test infrastructure for gate-store integration tests

use gate_store::{CredentialHasher, CredentialService, HashingParams, RecordStore};

use std::sync::Arc;

use tempfile::TempDir;

/// Cheap Argon2 parameters so tests stay fast
pub fn fast_hasher() -> CredentialHasher {
    CredentialHasher::new(HashingParams {
        memory_kib: 1024,
        iterations: 1,
        parallelism: 1,
    })
    .expect("test hashing params are valid")
}

/// Credential service over a fresh temp directory
pub fn create_test_service() -> (TempDir, Arc<CredentialService>) {
    let temp = TempDir::new().expect("Failed to create temp dir");
    let store = RecordStore::new(temp.path().join("users.json"));
    let service = Arc::new(CredentialService::new(store, fast_hasher()));
    (temp, service)
}
