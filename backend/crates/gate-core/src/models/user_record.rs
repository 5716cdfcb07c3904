use crate::{User, generate_user_id};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user as persisted in the backing document.
///
/// This is the only type that carries the password hash. It is converted to
/// [`User`] before it crosses any API boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRecord {
    pub id: String,
    pub email: String,
    pub password_hash: String,

    // Audit
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserRecord {
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: generate_user_id(),
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy of this record with the hash stripped
    pub fn sanitized(&self) -> User {
        User {
            id: self.id.clone(),
            email: self.email.clone(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

impl From<UserRecord> for User {
    fn from(r: UserRecord) -> Self {
        Self {
            id: r.id,
            email: r.email,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}
