//! Single-file JSON document store.
//!
//! The whole document is read on every `load` and replaced on every `save`.
//! Writes go through a temp file that is fsynced and then renamed over the
//! target, so readers only ever see the previous or the next complete
//! document.
//!
//! There is no locking here. Callers that do load-modify-save must serialize
//! themselves (see `CredentialService`).

use crate::{Result as StoreErrorResult, StoreError};

use gate_core::UserDocument;

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info, warn};
use serde_json::Value;
use tokio::io::AsyncWriteExt;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct RecordStore {
    path: PathBuf,
}

impl RecordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the backing document.
    ///
    /// - missing or empty file: empty document
    /// - `users` missing or not an array: empty document (logged, not fatal)
    /// - invalid JSON or malformed user entries: `StoreError::Parse`
    pub async fn load(&self) -> StoreErrorResult<UserDocument> {
        debug!("Reading user document from {}", self.path.display());

        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(
                    "No user document at {} yet, starting empty",
                    self.path.display()
                );
                return Ok(UserDocument::default());
            }
            Err(e) => return Err(StoreError::io(self.path.clone(), e)),
        };

        if contents.trim().is_empty() {
            info!("User document {} is empty", self.path.display());
            return Ok(UserDocument::default());
        }

        let value: Value = serde_json::from_str(&contents)
            .map_err(|e| StoreError::parse(self.path.clone(), e))?;

        if !has_user_array(&value) {
            warn!(
                "User document {} has no \"users\" array, resetting to empty",
                self.path.display()
            );
            return Ok(UserDocument::default());
        }

        serde_json::from_value(value).map_err(|e| StoreError::parse(self.path.clone(), e))
    }

    /// Atomically replace the backing document.
    pub async fn save(&self, document: &UserDocument) -> StoreErrorResult<()> {
        let value = serde_json::to_value(document)?;
        self.save_value(&value).await
    }

    /// Atomically replace the backing document with raw JSON.
    ///
    /// The structure is checked before anything touches disk, so a rejected
    /// value leaves the current file exactly as it was.
    pub async fn save_value(&self, value: &Value) -> StoreErrorResult<()> {
        if !has_user_array(value) {
            return Err(StoreError::invalid_structure(
                "\"users\" must be an array",
            ));
        }

        let staged = self.stage(value).await?;
        staged.commit().await?;

        debug!("User document written to {}", self.path.display());
        Ok(())
    }

    /// Write `value` to a fresh temp file beside the target and fsync it.
    ///
    /// The returned [`StagedWrite`] removes the temp file on drop unless it
    /// was committed.
    pub(crate) async fn stage(&self, value: &Value) -> StoreErrorResult<StagedWrite> {
        let json = serde_json::to_string_pretty(value)?;

        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| StoreError::io(dir.to_path_buf(), e))?;
        }

        let staged = StagedWrite {
            temp_path: self.next_temp_path(),
            target: self.path.clone(),
            committed: false,
        };

        let mut file = tokio::fs::File::create(&staged.temp_path)
            .await
            .map_err(|e| StoreError::io(staged.temp_path.clone(), e))?;

        file.write_all(json.as_bytes())
            .await
            .map_err(|e| StoreError::io(staged.temp_path.clone(), e))?;

        file.sync_all()
            .await
            .map_err(|e| StoreError::io(staged.temp_path.clone(), e))?;

        Ok(staged)
    }

    fn next_temp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| String::from("users.json"));

        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.path
            .with_file_name(format!("{file_name}.tmp.{}.{seq}", std::process::id()))
    }
}

fn has_user_array(value: &Value) -> bool {
    value.get("users").is_some_and(Value::is_array)
}

/// A fully written temp file waiting to be renamed over its target.
#[derive(Debug)]
pub(crate) struct StagedWrite {
    temp_path: PathBuf,
    target: PathBuf,
    committed: bool,
}

impl StagedWrite {
    #[cfg(test)]
    pub(crate) fn temp_path(&self) -> &Path {
        &self.temp_path
    }

    /// Single rename; the only step that makes the new document visible.
    pub(crate) async fn commit(mut self) -> StoreErrorResult<()> {
        tokio::fs::rename(&self.temp_path, &self.target)
            .await
            .map_err(|e| {
                StoreError::atomic_rename(self.temp_path.clone(), self.target.clone(), e)
            })?;

        self.committed = true;
        Ok(())
    }
}

impl Drop for StagedWrite {
    fn drop(&mut self) {
        if self.committed {
            return;
        }

        // Best-effort cleanup
        if let Err(e) = std::fs::remove_file(&self.temp_path)
            && e.kind() != ErrorKind::NotFound
        {
            warn!(
                "Failed to remove temp file {}: {}",
                self.temp_path.display(),
                e
            );
        }
    }
}
