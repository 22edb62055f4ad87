//! Root application component with routing and context providers.
//!
//! ARCHITECTURE
//! ============
//! `App` provides every shared context (auth, UI, notifications, client
//! config) before any route renders, then restores a stored session in the
//! browser. Until that restore finishes `AuthState::loading` stays true and
//! gated pages render placeholders instead of redirecting.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::config::ClientConfig;
use crate::pages::{
    audit_log::AuditLogPage, change_password::ChangePasswordPage, dashboard::DashboardPage, entity::EntityPage,
    home::HomePage, login::LoginPage,
};
use crate::state::{auth::AuthState, notifications::NotificationState, ui::UiState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let auth = RwSignal::new(AuthState::pending());
    let theme = crate::util::theme::read_preference();
    crate::util::theme::apply(theme);
    let ui = RwSignal::new(UiState { theme, ..UiState::default() });
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(config.clone());
    provide_context(auth);
    provide_context(ui);
    provide_context(notifications);

    restore_session(&config, auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/dashboard.css"/>
        <Title text="Dashboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=(StaticSegment("dashboard"), ParamSegment("slug")) view=EntityPage/>
                <Route path=StaticSegment("audit") view=AuditLogPage/>
                <Route path=(StaticSegment("settings"), StaticSegment("password")) view=ChangePasswordPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}

/// Load the stored session and confirm it with the platform. Resolves
/// `auth.loading` either way.
fn restore_session(config: &ClientConfig, auth: RwSignal<AuthState>) {
    #[cfg(feature = "hydrate")]
    {
        let Some(stored) = crate::util::session::load() else {
            auth.update(AuthState::sign_out);
            return;
        };
        let config = config.clone();
        leptos::task::spawn_local(async move {
            match crate::net::api::validate_session(&config, stored).await {
                Some(session) => {
                    crate::util::session::save(&session);
                    auth.update(|a| a.sign_in(session));
                }
                None => {
                    crate::util::session::clear();
                    auth.update(AuthState::sign_out);
                }
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, auth);
    }
}
