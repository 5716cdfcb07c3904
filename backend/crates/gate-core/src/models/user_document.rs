use crate::UserRecord;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// The whole persisted document: every user record plus any other top-level
/// keys that were already present in the file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserDocument {
    pub users: Vec<UserRecord>,

    /// Unrecognised top-level keys, carried through rewrites untouched
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl UserDocument {
    /// Exact, case-sensitive email lookup
    pub fn find_by_email(&self, email: &str) -> Option<&UserRecord> {
        self.users.iter().find(|u| u.email == email)
    }

    pub fn contains_email(&self, email: &str) -> bool {
        self.find_by_email(email).is_some()
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
