//! Credential service: registration and credential checks over the record
//! store.
//!
//! Registration holds a process-wide writer lock across the whole
//! load-check-append-save sequence, so two concurrent registrations in the
//! same process cannot both pass the uniqueness check. Separate processes
//! sharing one backing file are not coordinated.

use crate::{CredentialError, CredentialHasher, RecordStore, Result as StoreErrorResult, StoreError};

use gate_core::{User, UserRecord};

use log::info;
use tokio::sync::Mutex;

pub struct CredentialService {
    store: RecordStore,
    hasher: CredentialHasher,
    write_lock: Mutex<()>,
}

impl CredentialService {
    pub fn new(store: RecordStore, hasher: CredentialHasher) -> Self {
        Self {
            store,
            hasher,
            write_lock: Mutex::new(()),
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    /// Exact email lookup, returned without the hash
    pub async fn find_by_email(&self, email: &str) -> StoreErrorResult<Option<User>> {
        let document = self.store.load().await?;
        Ok(document.find_by_email(email).map(UserRecord::sanitized))
    }

    /// Register a new user.
    ///
    /// Fails with [`CredentialError::DuplicateEmail`] if the email is taken.
    pub async fn add(&self, email: &str, password: &str) -> Result<User, CredentialError> {
        let _guard = self.write_lock.lock().await;

        let mut document = self.store.load().await?;
        if document.contains_email(email) {
            info!("Registration rejected: email {} already exists", email);
            return Err(CredentialError::duplicate_email(email));
        }

        let password_hash = self.hash_blocking(password).await?;
        let record = UserRecord::new(email.to_string(), password_hash);
        let user = record.sanitized();

        document.users.push(record);
        self.store.save(&document).await?;

        info!("Registered user {} with id {}", user.email, user.id);
        Ok(user)
    }

    /// Check a candidate password.
    ///
    /// Returns `None` both for an unknown email and for a wrong password.
    pub async fn validate(&self, email: &str, password: &str) -> StoreErrorResult<Option<User>> {
        let document = self.store.load().await?;

        let Some(record) = document.find_by_email(email) else {
            info!("Credential check failed: no user for {}", email);
            return Ok(None);
        };

        if !self
            .verify_blocking(password, &record.password_hash)
            .await?
        {
            info!("Credential check failed: wrong password for {}", email);
            return Ok(None);
        }

        info!("Credentials accepted for {}", email);
        Ok(Some(record.sanitized()))
    }

    async fn hash_blocking(&self, password: &str) -> StoreErrorResult<String> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();

        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| StoreError::task(e.to_string()))?
    }

    async fn verify_blocking(&self, password: &str, stored_hash: &str) -> StoreErrorResult<bool> {
        let hasher = self.hasher.clone();
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();

        tokio::task::spawn_blocking(move || hasher.verify(&password, &stored_hash))
            .await
            .map_err(|e| StoreError::task(e.to_string()))
    }
}
