//! `/audit` audit log viewer.
//!
//! ERROR HANDLING
//! ==============
//! A failed query renders an error banner above an empty table; the page
//! itself keeps working and `Refresh` retries.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::audit_log_table::AuditLogTable;
use crate::components::page_header::PageHeader;
use crate::components::search_input::SearchInput;
use crate::components::top_bar::TopBar;
use crate::hooks::audit_log::use_audit_log;
use crate::state::audit::filter_logs;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

#[component]
pub fn AuditLogPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    let tenant = Signal::derive(move || auth.with(AuthState::tenant_id));
    let audit = use_audit_log(tenant);
    let query = RwSignal::new(String::new());
    let visible = Signal::derive(move || audit.logs.with(|logs| filter_logs(logs, &query.get())));

    view! {
        <div class="audit-page">
            <TopBar/>
            <main class="audit-page__body">
                <PageHeader title="Audit log" description="The 100 most recent changes in your tenant.">
                    <SearchInput value=query placeholder="Search action, table, record, user..." />
                    <button class="btn" on:click=move |_| audit.refetch.run(()) disabled=move || audit.is_loading.get()>
                        "Refresh"
                    </button>
                </PageHeader>
                <Show when=move || audit.error.get().is_some()>
                    <p class="banner banner--error">{move || audit.error.get().unwrap_or_default()}</p>
                </Show>
                <Show
                    when=move || !audit.is_loading.get()
                    fallback=|| view! { <p class="audit-page__loading">"Loading audit log..."</p> }
                >
                    <Show
                        when=move || !visible.with(Vec::is_empty)
                        fallback=|| view! { <p class="audit-page__empty">"No audit entries."</p> }
                    >
                        <AuditLogTable logs=visible />
                    </Show>
                </Show>
            </main>
        </div>
    }
}
