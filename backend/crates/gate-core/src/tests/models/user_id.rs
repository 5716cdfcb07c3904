use crate::generate_user_id;

use std::collections::HashSet;

#[test]
fn test_user_id_format() {
    let id = generate_user_id();
    let parts: Vec<&str> = id.split('_').collect();

    assert_eq!(parts.len(), 3);
    assert_eq!(parts[0], "user");
    assert!(parts[1].parse::<i64>().is_ok());
    assert_eq!(parts[2].len(), 7);
    assert!(
        parts[2]
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_ascii_lowercase())
    );
}

#[test]
fn test_user_ids_are_distinct() {
    let ids: HashSet<String> = (0..500).map(|_| generate_user_id()).collect();
    assert_eq!(ids.len(), 500);
}
