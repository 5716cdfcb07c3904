
use gate_core::User;

use chrono::{TimeZone, Utc};

pub(crate) fn sample_user() -> User {
    let created = Utc.with_ymd_and_hms(2026, 1, 2, 3, 4, 5).unwrap();
    User {
        id: "user_1767323045000_abc1234".to_string(),
        email: "a@b.com".to_string(),
        created_at: created,
        updated_at: created,
    }
}
