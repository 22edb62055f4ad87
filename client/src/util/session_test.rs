use super::*;
use platform::AuthUser;

fn session() -> Session {
    Session {
        access_token: "jwt-1".to_owned(),
        refresh_token: Some("r-1".to_owned()),
        expires_in: Some(3600),
        user: AuthUser { id: "u-1".to_owned(), email: None, user_metadata: serde_json::json!({}) },
    }
}

#[test]
fn encoded_session_decodes_back() {
    let raw = encode(&session()).unwrap();
    assert_eq!(decode(&raw), Some(session()));
}

#[test]
fn decode_rejects_corrupt_entry() {
    assert_eq!(decode("{not json"), None);
    assert_eq!(decode(r#"{"access_token":"x"}"#), None);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn load_is_empty_off_browser() {
    save(&session());
    assert_eq!(load(), None);
    clear();
}
