//! Entity scope for the subtree of an entity page.
//!
//! SYSTEM CONTEXT
//! ==============
//! An entity page resolves its route slug to an [`EntityRoute`] and wraps its
//! content in `EntityProvider`. Everything below reads the active route via
//! [`use_entity_context`]. There is no fallback value. Reading
//! the scope outside a provider is a wiring bug, so the infallible accessor
//! panics and [`try_use_entity_context`] reports it as an error.

#[cfg(test)]
#[path = "entity_test.rs"]
mod entity_test;

use leptos::prelude::*;
use platform::EntityRoute;

/// Context key for the active entity route.
#[derive(Clone, Debug, PartialEq)]
struct EntityScope(EntityRoute);

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntityContextError {
    #[error("entity context read outside of an EntityProvider")]
    MissingProvider,
}

/// Make `route` the active entity for the current owner and its children.
pub fn provide_entity_context(route: EntityRoute) {
    provide_context(EntityScope(route));
}

/// Active entity route, or an error outside a provider.
///
/// # Errors
///
/// Returns [`EntityContextError::MissingProvider`] when no ancestor provided
/// an entity scope.
pub fn try_use_entity_context() -> Result<EntityRoute, EntityContextError> {
    use_context::<EntityScope>()
        .map(|scope| scope.0)
        .ok_or(EntityContextError::MissingProvider)
}

/// Active entity route.
///
/// # Panics
///
/// Panics when called outside an `EntityProvider`.
pub fn use_entity_context() -> EntityRoute {
    match try_use_entity_context() {
        Ok(route) => route,
        Err(e) => panic!("{e}"),
    }
}
