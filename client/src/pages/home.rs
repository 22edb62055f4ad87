//! `/` routing gate.
//!
//! Waits for auth to resolve, then replaces itself with `/dashboard` or
//! `/login`. Holds no state of its own.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{AuthRoute, DASHBOARD_PATH, LOGIN_PATH, auth_route};

/// What the gate does for a given auth state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HomeAction {
    Placeholder,
    Redirect(&'static str),
}

#[must_use]
pub fn home_action(state: &AuthState) -> HomeAction {
    match auth_route(state) {
        AuthRoute::Pending => HomeAction::Placeholder,
        AuthRoute::SignedIn => HomeAction::Redirect(DASHBOARD_PATH),
        AuthRoute::SignedOut => HomeAction::Redirect(LOGIN_PATH),
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        if let HomeAction::Redirect(path) = auth.with(home_action) {
            navigate(path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! {
        <div class="home-skeleton" aria-busy="true">
            <div class="skeleton skeleton--bar"></div>
            <div class="skeleton skeleton--block"></div>
            <div class="skeleton skeleton--block"></div>
        </div>
    }
}
