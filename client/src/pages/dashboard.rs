//! Dashboard page: the tenant's entity menu with a search filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The signed-in landing route. Redirects to `/login` once auth resolves
//! without a user.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::entity_menu::EntityMenu;
use crate::components::page_header::PageHeader;
use crate::components::search_input::SearchInput;
use crate::components::top_bar::TopBar;
use crate::hooks::entity_routes::use_entity_routes;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let entities = use_entity_routes();
    let query = RwSignal::new(String::new());

    view! {
        <div class="dashboard-page">
            <TopBar/>
            <main class="dashboard-page__body">
                <PageHeader title="Dashboard" description="Pick an entity to work with.">
                    <SearchInput value=query placeholder="Filter entities..." />
                </PageHeader>
                <Show when=move || entities.error.get().is_some()>
                    <p class="banner banner--error">{move || entities.error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !entities.is_loading.get()
                    fallback=|| view! { <p class="dashboard-page__loading">"Loading entities..."</p> }
                >
                    <EntityMenu routes=entities.routes query=query.into() active_slug=Signal::derive(|| None) />
                </Show>
            </main>
        </div>
    }
}
