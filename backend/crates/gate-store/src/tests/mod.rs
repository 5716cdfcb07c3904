
use crate::RecordStore;

use tempfile::TempDir;

/// Store backed by `<tempdir>/users.json`; keep the `TempDir` alive for the test
pub(crate) fn temp_store() -> (TempDir, RecordStore) {
    let temp = TempDir::new().unwrap();
    let store = RecordStore::new(temp.path().join("users.json"));
    (temp, store)
}
