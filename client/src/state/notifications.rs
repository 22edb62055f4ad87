//! Toast notifications shown by the `ToastStack` component.
//!
//! Hooks push a [`Notice`] and forget about it; the stack renders the newest
//! entries and each one dismisses itself after [`TOAST_TIMEOUT_MS`] in the
//! browser.

#[cfg(test)]
#[path = "notifications_test.rs"]
mod notifications_test;

use leptos::prelude::*;

/// Visible toasts; older entries are dropped first.
pub const MAX_VISIBLE: usize = 5;

pub const TOAST_TIMEOUT_MS: u32 = 4_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// A notification before it is queued.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
}

impl Notice {
    #[must_use]
    pub fn success(title: &str) -> Self {
        Self { kind: NotificationKind::Success, title: title.to_owned(), message: None }
    }

    #[must_use]
    pub fn error(title: &str, message: &str) -> Self {
        Self { kind: NotificationKind::Error, title: title.to_owned(), message: Some(message.to_owned()) }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    pub items: Vec<Notification>,
    next_id: u64,
}

impl NotificationState {
    /// Queue a notice and return its id.
    pub fn push(&mut self, notice: Notice) -> u64 {
        self.next_id += 1;
        let id = self.next_id;
        self.items.push(Notification { id, kind: notice.kind, title: notice.title, message: notice.message });
        if self.items.len() > MAX_VISIBLE {
            let overflow = self.items.len() - MAX_VISIBLE;
            self.items.drain(..overflow);
        }
        id
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|item| item.id != id);
    }

    #[must_use]
    pub fn count(&self, kind: NotificationKind) -> usize {
        self.items.iter().filter(|item| item.kind == kind).count()
    }
}

/// Push `notice` into the shared stack and schedule its dismissal.
pub fn notify(notifications: RwSignal<NotificationState>, notice: Notice) {
    let Some(id) = notifications.try_update(|state| state.push(notice)) else {
        return;
    };
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(TOAST_TIMEOUT_MS).await;
        notifications.try_update(|state| state.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}
