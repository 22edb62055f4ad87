//! `/settings/password` self-service password change.

#[cfg(test)]
#[path = "change_password_test.rs"]
mod change_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::page_header::PageHeader;
use crate::components::top_bar::TopBar;
use crate::hooks::change_password::use_change_own_password;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

pub const EMPTY_PASSWORD: &str = "Enter a new password.";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match.";

/// Accepts any non-blank password that matches its confirmation. Strength
/// rules are enforced by the platform.
///
/// # Errors
///
/// Returns a user-facing message for a blank or mismatched entry.
pub fn validate_password_form(new_password: &str, confirm: &str) -> Result<String, &'static str> {
    if new_password.trim().is_empty() {
        return Err(EMPTY_PASSWORD);
    }
    if new_password != confirm {
        return Err(PASSWORD_MISMATCH);
    }
    Ok(new_password.to_owned())
}

#[component]
pub fn ChangePasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let handle = use_change_own_password();
    let new_password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let info = RwSignal::new(String::new());

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match validate_password_form(&new_password.get(), &confirm.get()) {
            Ok(password) => {
                info.set(String::new());
                handle.change_password.run(password);
                new_password.set(String::new());
                confirm.set(String::new());
            }
            Err(message) => info.set(message.to_owned()),
        }
    };

    view! {
        <div class="settings-page">
            <TopBar/>
            <main class="settings-page__body">
                <PageHeader title="Change password" />
                <form class="settings-form" on:submit=on_submit>
                    <input
                        class="settings-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="New password"
                        prop:value=move || new_password.get()
                        on:input=move |ev| new_password.set(event_target_value(&ev))
                    />
                    <input
                        class="settings-input"
                        type="password"
                        autocomplete="new-password"
                        placeholder="Confirm new password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                    <button class="btn btn--primary" type="submit" disabled=move || handle.is_changing.get()>
                        {move || if handle.is_changing.get() { "Updating..." } else { "Update password" }}
                    </button>
                </form>
                <Show when=move || !info.get().is_empty()>
                    <p class="settings-message">{move || info.get()}</p>
                </Show>
            </main>
        </div>
    }
}
