pub mod credential_hasher;
pub mod credential_service;
pub mod error;
pub mod record_store;

#[cfg(test)]
mod tests;

pub use credential_hasher::{CredentialHasher, HashingParams};
pub use credential_service::CredentialService;
pub use error::{CredentialError, Result, StoreError};
pub use record_store::RecordStore;
