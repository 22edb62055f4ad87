use super::*;
use platform::AuthUser;

fn user() -> AuthUser {
    AuthUser { id: "u1".to_owned(), email: Some("ada@example.com".to_owned()), user_metadata: serde_json::Value::Null }
}

#[test]
fn should_redirect_unauth_when_not_loading_and_user_missing() {
    let state = AuthState { loading: false, ..AuthState::default() };
    assert!(should_redirect_unauth(&state));
}

#[test]
fn should_not_redirect_while_loading() {
    let state = AuthState::pending();
    assert!(!should_redirect_unauth(&state));
    assert_eq!(auth_route(&state), AuthRoute::Pending);
}

#[test]
fn should_not_redirect_when_user_exists() {
    let state = AuthState { user: Some(user()), loading: false, ..AuthState::default() };
    assert!(!should_redirect_unauth(&state));
    assert_eq!(auth_route(&state), AuthRoute::SignedIn);
}

#[test]
fn loading_wins_over_present_user() {
    let state = AuthState { user: Some(user()), loading: true, ..AuthState::default() };
    assert_eq!(auth_route(&state), AuthRoute::Pending);
}
