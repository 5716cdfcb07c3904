use crate::{UserDocument, UserRecord};

use googletest::prelude::*;
use serde_json::json;

#[test]
fn given_default_document_then_it_is_empty() {
    let doc = UserDocument::default();

    assert_that!(doc.is_empty(), eq(true));
    assert_that!(doc.len(), eq(0));
    assert_that!(doc.find_by_email("a@b.com"), none());
}

#[test]
fn given_record_when_find_by_email_then_matches_exactly() {
    let mut doc = UserDocument::default();
    doc.users
        .push(UserRecord::new("Alice@Example.com".into(), "h".into()));

    assert_that!(doc.find_by_email("Alice@Example.com"), some(anything()));
    assert_that!(doc.find_by_email("alice@example.com"), none());
    assert_that!(doc.contains_email("Alice@Example.com"), eq(true));
}

#[test]
fn given_extra_top_level_keys_when_roundtrip_then_preserved() {
    let raw = json!({
        "users": [],
        "schemaVersion": 2
    });

    let doc: UserDocument = serde_json::from_value(raw).unwrap();
    assert_eq!(doc.extra.get("schemaVersion"), Some(&json!(2)));

    let back = serde_json::to_value(&doc).unwrap();
    assert_eq!(back["schemaVersion"], json!(2));
    assert!(back["users"].is_array());
}
