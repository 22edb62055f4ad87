//! Top bar with the brand mark, primary navigation, theme toggle, and logout.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered by every signed-in page. Logout revokes the session on the
//! platform, clears the stored copy, and returns to `/login`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::components::brand_logo::BrandLogo;
use crate::config::ClientConfig;
use crate::state::auth::AuthState;
use crate::state::ui::{Theme, UiState};

#[component]
pub fn TopBar() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let config = expect_context::<ClientConfig>();
    let pathname = use_location().pathname;

    let display_name = move || {
        auth.with(|a| a.user.as_ref().map(platform::AuthUser::display_name))
            .unwrap_or_default()
    };
    let is_current = move |prefix: &'static str| move || pathname.get().starts_with(prefix);

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            let config = config.clone();
            let token = auth.with_untracked(AuthState::access_token);
            leptos::task::spawn_local(async move {
                crate::net::api::sign_out(&config, token).await;
                crate::util::session::clear();
                auth.update(AuthState::sign_out);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href(crate::util::auth::LOGIN_PATH);
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = &config;
        }
    };

    view! {
        <header class="top-bar">
            <a href="/dashboard" class="top-bar__brand">
                <BrandLogo size=28 />
            </a>
            <nav class="top-bar__nav">
                <a href="/dashboard" class="top-bar__link" class:top-bar__link--active=is_current("/dashboard")>
                    "Dashboard"
                </a>
                <a href="/audit" class="top-bar__link" class:top-bar__link--active=is_current("/audit")>
                    "Audit log"
                </a>
                <a href="/settings/password" class="top-bar__link" class:top-bar__link--active=is_current("/settings")>
                    "Password"
                </a>
            </nav>
            <span class="top-bar__spacer"></span>
            <button
                class="btn top-bar__theme-toggle"
                title="Toggle dark mode"
                on:click=move |_| {
                    let next = crate::util::theme::toggle(ui.get_untracked().theme);
                    ui.update(|u| u.theme = next);
                }
            >
                {move || if ui.get().theme == Theme::Dark { "☀" } else { "☾" }}
            </button>
            <span class="top-bar__user">{display_name}</span>
            <button class="btn top-bar__logout" on:click=on_logout title="Sign out">
                "Logout"
            </button>
        </header>
    }
}
