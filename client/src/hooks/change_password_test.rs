use futures::executor::block_on;
use leptos::reactive::owner::Owner;
use platform::testing::MockTransport;
use platform::{AuthUser, Session};

use super::*;
use crate::state::notifications::NotificationKind;

fn client(transport: MockTransport) -> PlatformClient<MockTransport> {
    PlatformClient::new(transport).with_access_token(Some("jwt-1".to_owned()))
}

fn signed_in(metadata: serde_json::Value) -> AuthState {
    let mut state = AuthState::pending();
    state.sign_in(Session {
        access_token: "jwt-1".to_owned(),
        refresh_token: None,
        expires_in: None,
        user: AuthUser { id: "u-1".to_owned(), email: None, user_metadata: metadata },
    });
    state
}

#[test]
fn success_yields_exactly_one_success_notice() {
    let transport = MockTransport::new().respond(200, &serde_json::json!({ "id": "u-1" }));
    let notice = block_on(run_password_change(&client(transport.clone()), "x"));

    let mut notifications = NotificationState::default();
    notifications.push(notice);

    assert_eq!(notifications.count(NotificationKind::Success), 1);
    assert_eq!(notifications.count(NotificationKind::Error), 0);
    assert_eq!(notifications.items[0].title, PASSWORD_CHANGED_TITLE);
    assert_eq!(transport.requests().len(), 1);
}

#[test]
fn failure_carries_platform_message() {
    let transport = MockTransport::new().respond(422, &serde_json::json!({ "msg": "Password should be at least 6 characters" }));
    let notice = block_on(run_password_change(&client(transport), "x"));

    assert_eq!(notice.kind, NotificationKind::Error);
    assert_eq!(notice.title, PASSWORD_FAILED_TITLE);
    assert_eq!(notice.message.as_deref(), Some("Password should be at least 6 characters"));
}

#[test]
fn missing_session_is_reported_as_error() {
    let transport = MockTransport::new();
    let notice = block_on(run_password_change(&PlatformClient::new(transport.clone()), "x"));

    assert_eq!(notice.kind, NotificationKind::Error);
    assert_eq!(notice.message.as_deref(), Some("not authenticated"));
    assert!(transport.requests().is_empty());
}

#[test]
fn password_changed_event_needs_tenant() {
    assert!(password_changed_event(&signed_in(serde_json::json!({}))).is_none());

    let payload = password_changed_event(&signed_in(serde_json::json!({ "tenant_id": "t-1" }))).unwrap();
    assert_eq!(payload.event, "user.password_changed");
    assert_eq!(payload.tenant_id, "t-1");
    assert_eq!(payload.user_id.as_deref(), Some("u-1"));
    assert!(payload.timestamp.is_none());
}

// =============================================================
// Busy flag and toasts across a full attempt
// =============================================================

#[test]
fn second_submit_while_busy_is_ignored() {
    let owner = Owner::new();
    owner.with(|| {
        let busy = RwSignal::new(false);
        assert!(begin_password_change(busy));
        assert!(busy.get_untracked());
        assert!(!begin_password_change(busy));
        assert!(busy.get_untracked());
    });
}

#[test]
fn successful_change_leaves_one_toast_and_clears_busy() {
    let owner = Owner::new();
    owner.with(|| {
        let busy = RwSignal::new(false);
        let notifications = RwSignal::new(NotificationState::default());
        let transport = MockTransport::new().respond(200, &serde_json::json!({ "id": "u-1" }));

        assert!(begin_password_change(busy));
        assert!(!begin_password_change(busy));
        let succeeded = block_on(complete_password_change(&client(transport.clone()), "x", busy, notifications));

        assert!(succeeded);
        assert!(!busy.get_untracked());
        notifications.with_untracked(|state| {
            assert_eq!(state.items.len(), 1);
            assert_eq!(state.count(NotificationKind::Success), 1);
        });
        assert_eq!(transport.requests().len(), 1);
    });
}

#[test]
fn failed_change_leaves_one_error_toast_and_clears_busy() {
    let owner = Owner::new();
    owner.with(|| {
        let busy = RwSignal::new(false);
        let notifications = RwSignal::new(NotificationState::default());
        let transport = MockTransport::new().respond(422, &serde_json::json!({ "msg": "too weak" }));

        assert!(begin_password_change(busy));
        let succeeded = block_on(complete_password_change(&client(transport), "x", busy, notifications));

        assert!(!succeeded);
        assert!(!busy.get_untracked());
        notifications.with_untracked(|state| {
            assert_eq!(state.items.len(), 1);
            assert_eq!(state.count(NotificationKind::Error), 1);
            assert_eq!(state.items[0].message.as_deref(), Some("too weak"));
        });
        assert!(begin_password_change(busy));
    });
}
