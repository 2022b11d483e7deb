//! Tests for the domain user model.

use super::*;
use chrono::TimeZone;
use rstest::{fixture, rstest};
use serde_json::json;

const VALID_ID: &str = "3fa85f64-5717-4562-b3fc-2c963f66afa6";

#[fixture]
fn created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp")
}

#[fixture]
fn stored_user(created_at: DateTime<Utc>) -> User {
    User::from_parts(UserParts {
        id: UserId::new(VALID_ID).expect("valid id"),
        username: Username::new("alice").expect("valid username"),
        email: EmailAddress::new("alice@x.com").expect("valid email"),
        password_hash: PasswordHash::new("$argon2id$v=19$stub").expect("valid hash"),
        role: Role::Admin,
        created_at,
        updated_at: created_at,
    })
}

#[rstest]
#[case("", UserValidationError::EmptyId)]
#[case("not-a-uuid", UserValidationError::InvalidId)]
#[case(" 3fa85f64-5717-4562-b3fc-2c963f66afa6", UserValidationError::InvalidId)]
fn user_id_rejects_invalid_values(#[case] raw: &str, #[case] expected: UserValidationError) {
    assert_eq!(UserId::new(raw), Err(expected));
}

#[rstest]
fn user_id_round_trips_through_serde() {
    let id = UserId::new(VALID_ID).expect("valid id");
    let value = serde_json::to_value(&id).expect("serialise id");
    assert_eq!(value, json!(VALID_ID));
    let parsed: UserId = serde_json::from_value(value).expect("deserialise id");
    assert_eq!(parsed, id);
    assert_eq!(parsed.as_ref(), VALID_ID);
}

#[rstest]
#[case("   ")]
#[case("")]
fn blank_usernames_and_emails_are_rejected(#[case] raw: &str) {
    assert_eq!(Username::new(raw), Err(UserValidationError::EmptyUsername));
    assert_eq!(EmailAddress::new(raw), Err(UserValidationError::EmptyEmail));
}

#[rstest]
fn password_hash_debug_is_redacted() {
    let hash = PasswordHash::new("$argon2id$secret").expect("valid hash");
    assert!(!format!("{hash:?}").contains("secret"));
}

#[rstest]
fn register_assigns_default_role_and_timestamps(created_at: DateTime<Utc>) {
    let user = User::register(
        Username::new(" bob ").expect("valid username"),
        EmailAddress::new("bob@x.com").expect("valid email"),
        PasswordHash::new("hash").expect("valid hash"),
        created_at,
    );

    assert_eq!(user.role(), Role::User);
    assert_eq!(user.username().as_ref(), "bob");
    assert_eq!(user.created_at(), created_at);
    assert_eq!(user.updated_at(), created_at);
}

#[rstest]
fn profile_omits_password(stored_user: User) {
    let value = serde_json::to_value(UserProfile::from(&stored_user)).expect("serialise");

    assert_eq!(
        value,
        json!({
            "id": VALID_ID,
            "username": "alice",
            "email": "alice@x.com",
            "role": "admin",
            "createdAt": "2024-05-01T12:00:00Z",
            "updatedAt": "2024-05-01T12:00:00Z",
        })
    );
    assert!(value.get("password").is_none());
}
