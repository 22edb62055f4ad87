//! `/dashboard/:slug` entity page.
//!
//! Resolves the slug against the tenant's menu and wraps the page body in an
//! `EntityProvider`, so everything below reads the route from context.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use leptos::prelude::*;
use leptos_router::hooks::{use_navigate, use_params_map};
use platform::EntityRoute;
use platform::types::find_entity_route;

use crate::components::entity_menu::EntityMenu;
use crate::components::entity_provider::EntityProvider;
use crate::components::page_header::PageHeader;
use crate::components::search_input::SearchInput;
use crate::components::top_bar::TopBar;
use crate::hooks::entity_routes::use_entity_routes;
use crate::state::auth::AuthState;
use crate::state::entity::use_entity_context;
use crate::util::auth::install_unauth_redirect;

/// Pretty-printed route config, or `None` when there is nothing to show.
#[must_use]
pub fn config_preview(config: &serde_json::Value) -> Option<String> {
    match config {
        serde_json::Value::Null => None,
        serde_json::Value::Object(map) if map.is_empty() => None,
        other => serde_json::to_string_pretty(other).ok(),
    }
}

#[component]
pub fn EntityPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let params = use_params_map();
    let slug = Signal::derive(move || params.with(|p| p.get("slug")));
    let entities = use_entity_routes();
    let query = RwSignal::new(String::new());

    let active = move || {
        let slug = slug.get()?;
        entities.routes.with(|routes| find_entity_route(routes, &slug).cloned())
    };

    view! {
        <div class="entity-page">
            <TopBar/>
            <div class="entity-page__layout">
                <aside class="entity-page__menu">
                    <SearchInput value=query placeholder="Filter entities..." />
                    <EntityMenu routes=entities.routes query=query.into() active_slug=slug />
                </aside>
                <main class="entity-page__body">
                    <Show
                        when=move || !entities.is_loading.get()
                        fallback=|| view! { <p class="entity-page__loading">"Loading..."</p> }
                    >
                        {move || match active() {
                            Some(route) => view! {
                                <EntityProvider route=route>
                                    <EntityDetail/>
                                </EntityProvider>
                            }
                            .into_any(),
                            None => view! {
                                <PageHeader title="Not found" description="No entity is configured at this address." />
                            }
                            .into_any(),
                        }}
                    </Show>
                </main>
            </div>
        </div>
    }
}

/// Body of an entity page; reads the active route from context.
#[component]
fn EntityDetail() -> impl IntoView {
    let route: EntityRoute = use_entity_context();
    let preview = config_preview(&route.config);

    view! {
        <PageHeader title=route.label.clone() description=format!("Entity type: {}", route.entity_type) />
        <dl class="entity-detail">
            <dt>"Key"</dt>
            <dd class="entity-detail__mono">{route.key.clone()}</dd>
            <dt>"Slug"</dt>
            <dd class="entity-detail__mono">{route.slug.clone()}</dd>
        </dl>
        {preview.map(|text| view! { <pre class="entity-detail__config">{text}</pre> })}
    }
}
