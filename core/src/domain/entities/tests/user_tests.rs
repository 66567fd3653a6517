//! Unit tests for the user record

use chrono::{Duration, Utc};

use crate::domain::entities::user::{UserRecord, QUOTA_LIMIT};

fn record() -> UserRecord {
    UserRecord::new(
        "a@x.com".to_string(),
        "A".to_string(),
        "482913".to_string(),
        Utc::now(),
    )
}

#[test]
fn test_new_record_starts_with_zero_generations() {
    let user = record();
    assert_eq!(user.generation_count, 0);
    assert_eq!(user.remaining_credits(QUOTA_LIMIT), 3);
    assert!(user.has_credit(QUOTA_LIMIT));
}

#[test]
fn test_reissue_keeps_generation_count() {
    let mut user = record();
    user.generation_count = 2;
    let later = user.last_login_at + Duration::minutes(5);

    user.reissue("Alice".to_string(), "000111".to_string(), later);

    assert_eq!(user.name, "Alice");
    assert_eq!(user.verification_code, "000111");
    assert_eq!(user.last_login_at, later);
    assert_eq!(user.generation_count, 2);
}

#[test]
fn test_remaining_credits_saturates() {
    let mut user = record();
    user.generation_count = 3;
    assert_eq!(user.remaining_credits(QUOTA_LIMIT), 0);
    assert!(!user.has_credit(QUOTA_LIMIT));

    user.generation_count = 7;
    assert_eq!(user.remaining_credits(QUOTA_LIMIT), 0);
}
