//! Subtree boundary that makes one entity route active.

use leptos::prelude::*;
use platform::EntityRoute;

use crate::state::entity::provide_entity_context;

/// Provide `route` to every descendant via `use_entity_context`.
#[component]
pub fn EntityProvider(route: EntityRoute, children: Children) -> impl IntoView {
    provide_entity_context(route);
    children()
}
