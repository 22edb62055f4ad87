//! Navigation list of the tenant's entity routes.
//!
//! DESIGN
//! ======
//! The menu is purely presentational: routes arrive already sorted from
//! `use_entity_routes`, and filtering by the search query happens here so
//! the dashboard and the entity page share the same behavior.

#[cfg(test)]
#[path = "entity_menu_test.rs"]
mod entity_menu_test;

use leptos::prelude::*;
use platform::EntityRoute;

#[must_use]
pub fn entity_href(slug: &str) -> String {
    format!("/dashboard/{slug}")
}

/// Routes whose label or key contains `query` (case-insensitive), in input
/// order.
#[must_use]
pub fn filter_routes(routes: &[EntityRoute], query: &str) -> Vec<EntityRoute> {
    let needle = query.trim().to_lowercase();
    routes
        .iter()
        .filter(|route| {
            needle.is_empty() || route.label.to_lowercase().contains(&needle) || route.key.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

#[component]
pub fn EntityMenu(
    routes: Signal<Vec<EntityRoute>>,
    query: Signal<String>,
    active_slug: Signal<Option<String>>,
) -> impl IntoView {
    let visible = move || filter_routes(&routes.get(), &query.get());

    view! {
        <nav class="entity-menu" aria-label="Entities">
            <Show
                when=move || !visible().is_empty()
                fallback=|| view! { <p class="entity-menu__empty">"No matching entities."</p> }
            >
                <ul class="entity-menu__list">
                    <For
                        each=visible
                        key=|route| route.id.clone()
                        children=move |route: EntityRoute| {
                            let slug = route.slug.clone();
                            let is_active = move || active_slug.get().as_deref() == Some(slug.as_str());
                            view! {
                                <li class="entity-menu__item">
                                    <a
                                        class="entity-menu__link"
                                        class:entity-menu__link--active=is_active
                                        href=entity_href(&route.slug)
                                    >
                                        {route.icon.map(|icon| view! { <span class=format!("icon icon--{icon}") aria-hidden="true"></span> })}
                                        <span class="entity-menu__label">{route.label}</span>
                                    </a>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </nav>
    }
}
