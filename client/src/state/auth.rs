//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Used by the home gate and route guards to coordinate login redirects, and
//! by data hooks to attach the session token to platform requests.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use platform::{AuthUser, Session};

/// Authentication state tracking the current user and loading status.
#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub user: Option<AuthUser>,
    pub session: Option<Session>,
    pub loading: bool,
}

impl AuthState {
    /// State before the stored session has been checked.
    #[must_use]
    pub fn pending() -> Self {
        Self { loading: true, ..Self::default() }
    }

    /// Adopt a freshly issued or restored session.
    pub fn sign_in(&mut self, session: Session) {
        self.user = Some(session.user.clone());
        self.session = Some(session);
        self.loading = false;
    }

    /// Drop the session and user; auth is resolved afterwards.
    pub fn sign_out(&mut self) {
        self.user = None;
        self.session = None;
        self.loading = false;
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.session.as_ref().map(|session| session.access_token.clone())
    }

    /// Tenant scope of the signed-in user, if the platform assigned one.
    #[must_use]
    pub fn tenant_id(&self) -> Option<String> {
        self.user.as_ref().and_then(AuthUser::tenant_id)
    }

    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.user.as_ref().map(|user| user.id.clone())
    }
}
