//! Search box bound to a caller-owned query signal.

#[cfg(test)]
#[path = "search_input_test.rs"]
mod search_input_test;

use leptos::prelude::*;

pub const DEFAULT_PLACEHOLDER: &str = "Search...";

/// Keys that clear the query.
#[must_use]
pub fn clears_query(key: &str) -> bool {
    key == "Escape"
}

#[component]
pub fn SearchInput(value: RwSignal<String>, #[prop(optional, into)] placeholder: Option<String>) -> impl IntoView {
    let placeholder = placeholder.unwrap_or_else(|| DEFAULT_PLACEHOLDER.to_owned());

    view! {
        <div class="search-input">
            <input
                class="search-input__field"
                type="search"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
                on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                    if clears_query(&ev.key()) {
                        ev.prevent_default();
                        value.set(String::new());
                    }
                }
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    type="button"
                    aria-label="Clear search"
                    on:click=move |_| value.set(String::new())
                >
                    "✕"
                </button>
            </Show>
        </div>
    }
}
