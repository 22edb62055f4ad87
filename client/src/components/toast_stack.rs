//! Toast stack rendering `NotificationState` from context.

#[cfg(test)]
#[path = "toast_stack_test.rs"]
mod toast_stack_test;

use leptos::prelude::*;

use crate::state::notifications::{Notification, NotificationKind, NotificationState};

#[must_use]
pub fn toast_class(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Success => "toast toast--success",
        NotificationKind::Error => "toast toast--error",
    }
}

#[component]
pub fn ToastStack() -> impl IntoView {
    let notifications = expect_context::<RwSignal<NotificationState>>();

    view! {
        <div class="toast-stack" role="status" aria-live="polite">
            <For
                each=move || notifications.get().items
                key=|item| item.id
                children=move |item: Notification| {
                    let id = item.id;
                    view! {
                        <div class=toast_class(item.kind)>
                            <div class="toast__body">
                                <strong class="toast__title">{item.title}</strong>
                                {item.message.map(|text| view! { <p class="toast__message">{text}</p> })}
                            </div>
                            <button
                                class="toast__dismiss"
                                type="button"
                                aria-label="Dismiss"
                                on:click=move |_| notifications.update(|s| s.dismiss(id))
                            >
                                "✕"
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
