//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The home gate and every protected page apply the same decision: wait
//! while auth resolves, then send signed-out users to `/login`.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Where an auth state should send the user, once resolved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthRoute {
    /// Still resolving; render a placeholder and do not navigate.
    Pending,
    SignedIn,
    SignedOut,
}

#[must_use]
pub fn auth_route(state: &AuthState) -> AuthRoute {
    if state.loading {
        AuthRoute::Pending
    } else if state.user.is_some() {
        AuthRoute::SignedIn
    } else {
        AuthRoute::SignedOut
    }
}

#[must_use]
pub fn should_redirect_unauth(state: &AuthState) -> bool {
    auth_route(state) == AuthRoute::SignedOut
}

/// Redirect to `/login` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(auth: RwSignal<AuthState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        if should_redirect_unauth(&auth.get()) {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
