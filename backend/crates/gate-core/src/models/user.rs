use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Password-free view of a user, safe to return to callers and to cache
/// client-side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
