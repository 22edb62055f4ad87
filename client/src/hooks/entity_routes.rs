//! `use_entity_routes`: the tenant's navigable entity menu.

use leptos::prelude::*;
use platform::EntityRoute;

use crate::config::ClientConfig;
use crate::state::auth::AuthState;

#[derive(Clone, Copy)]
pub struct EntityRoutesHandle {
    /// Active routes in `order_index` order.
    pub routes: Signal<Vec<EntityRoute>>,
    pub is_loading: Signal<bool>,
    pub error: Signal<Option<String>>,
}

/// Load the menu for the signed-in user's tenant once auth has resolved.
pub fn use_entity_routes() -> EntityRoutesHandle {
    let auth = expect_context::<RwSignal<AuthState>>();
    let config = expect_context::<ClientConfig>();
    let routes = RwSignal::new(Vec::<EntityRoute>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(None::<String>);

    Effect::new(move || {
        let state = auth.get();
        if state.loading || state.user.is_none() {
            return;
        }
        loading.set(true);
        #[cfg(feature = "hydrate")]
        {
            let client = crate::net::api::platform_client(&config, state.access_token());
            leptos::task::spawn_local(async move {
                match client.fetch_entity_routes(state.tenant_id().as_deref()).await {
                    Ok(items) => {
                        routes.try_set(items);
                        error.try_set(None);
                    }
                    Err(e) => {
                        leptos::logging::warn!("entity routes query failed: {e}");
                        routes.try_set(Vec::new());
                        error.try_set(Some(e.to_string()));
                    }
                }
                loading.try_set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (&config, state, routes, error);
            loading.set(false);
        }
    });

    EntityRoutesHandle { routes: routes.into(), is_loading: loading.into(), error: error.into() }
}
