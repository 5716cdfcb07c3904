//! Directory-backed key/value store for client-side session data.
//!
//! Each key lives in `<dir>/<key>.json`. Values are opaque strings; callers
//! own the encoding.

pub(crate) mod error;

use crate::storage::error::{Result as StorageResult, StorageError};

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, info};
use serde::Serialize;

static TEMP_COUNTER: AtomicU64 = AtomicU64::new(0);

#[derive(Debug, Clone)]
pub struct LocalStorage {
    dir: PathBuf,
}

impl LocalStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Keys map straight to file names, so only `[A-Za-z0-9_-]` is allowed
    fn item_path(&self, key: &str) -> StorageResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(StorageError::invalid_key(key));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }

    /// Stored value, or `None` if the key was never set.
    pub fn get_item(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.item_path(key)?;

        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("No stored value for {key}");
                Ok(None)
            }
            Err(e) => Err(StorageError::file_read(path, e)),
        }
    }

    /// Replace the value for `key` using the atomic write pattern.
    ///
    /// 1. Write to a temp file beside the target
    /// 2. fsync
    /// 3. Rename over the target
    pub fn set_item(&self, key: &str, value: &str) -> StorageResult<()> {
        let final_path = self.item_path(key)?;

        fs::create_dir_all(&self.dir)
            .map_err(|e| StorageError::dir_creation(self.dir.clone(), e))?;

        let temp_path = self.temp_path(key);

        {
            let mut file = fs::File::create(&temp_path)
                .map_err(|e| StorageError::file_write(temp_path.clone(), e))?;

            let written = file
                .write_all(value.as_bytes())
                .and_then(|()| file.sync_all());
            if let Err(e) = written {
                let _ = fs::remove_file(&temp_path);
                return Err(StorageError::file_write(temp_path, e));
            }
        }

        fs::rename(&temp_path, &final_path).map_err(|e| {
            // Clean up temp file on failure
            let _ = fs::remove_file(&temp_path);
            StorageError::atomic_rename(temp_path.clone(), final_path.clone(), e)
        })?;

        debug!("Stored {key} at {}", final_path.display());
        Ok(())
    }

    /// Unique per call, so concurrent writers never share a temp file
    pub(crate) fn temp_path(&self, key: &str) -> PathBuf {
        let seq = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
        self.dir
            .join(format!("{key}.json.tmp.{}.{seq}", std::process::id()))
    }

    /// Serialize `value` as JSON and store it under `key`
    pub fn set_json<T: Serialize>(&self, key: &str, value: &T) -> StorageResult<()> {
        let json = serde_json::to_string(value)?;
        self.set_item(key, &json)
    }

    /// Remove `key`. Removing a missing key is not an error.
    pub fn remove_item(&self, key: &str) -> StorageResult<()> {
        let path = self.item_path(key)?;

        match fs::remove_file(&path) {
            Ok(()) => {
                info!("Removed stored {key}");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::file_write(path, e)),
        }
    }
}
