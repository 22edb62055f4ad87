use platform::{AuthUser, Session};

use super::*;

fn session() -> Session {
    Session {
        access_token: "tok".to_owned(),
        refresh_token: None,
        expires_in: None,
        user: AuthUser { id: "u-1".to_owned(), email: None, user_metadata: serde_json::Value::Null },
    }
}

#[test]
fn loading_renders_placeholder_without_redirect() {
    assert_eq!(home_action(&AuthState::pending()), HomeAction::Placeholder);
}

#[test]
fn loaded_without_user_redirects_to_login() {
    let mut state = AuthState::pending();
    state.sign_out();
    assert_eq!(home_action(&state), HomeAction::Redirect("/login"));
}

#[test]
fn loaded_with_user_redirects_to_dashboard() {
    let mut state = AuthState::pending();
    state.sign_in(session());
    assert_eq!(home_action(&state), HomeAction::Redirect("/dashboard"));
}
