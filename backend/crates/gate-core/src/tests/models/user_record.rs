use crate::{User, UserRecord};

#[test]
fn test_user_record_new() {
    let record = UserRecord::new("a@b.com".to_string(), "$argon2id$hash".to_string());

    assert_eq!(record.email, "a@b.com");
    assert_eq!(record.password_hash, "$argon2id$hash");
    assert!(record.id.starts_with("user_"));
    assert_eq!(record.created_at, record.updated_at);
}

#[test]
fn test_sanitized_drops_hash() {
    let record = UserRecord::new("a@b.com".to_string(), "secret-hash".to_string());
    let user = record.sanitized();

    assert_eq!(user.id, record.id);
    assert_eq!(user.email, record.email);
    assert_eq!(user.created_at, record.created_at);

    let json = serde_json::to_string(&user).unwrap();
    assert!(!json.contains("secret-hash"));
    assert!(!json.contains("passwordHash"));
}

#[test]
fn test_from_record_matches_sanitized() {
    let record = UserRecord::new("a@b.com".to_string(), "hash".to_string());
    let expected = record.sanitized();

    let user: User = record.into();

    assert_eq!(user, expected);
}

#[test]
fn test_record_serializes_camel_case() {
    let record = UserRecord::new("a@b.com".to_string(), "hash".to_string());
    let value = serde_json::to_value(&record).unwrap();

    assert!(value.get("passwordHash").is_some());
    assert!(value.get("createdAt").is_some());
    assert!(value.get("updatedAt").is_some());
    assert!(value.get("password_hash").is_none());
}
