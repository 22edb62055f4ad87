//! Tabular view of audit records.
//!
//! Rows render in the order given; the hook already sorts newest first.

#[cfg(test)]
#[path = "audit_log_table_test.rs"]
mod audit_log_table_test;

use leptos::prelude::*;
use platform::AuditLog;

const CHANGES_PREVIEW_CHARS: usize = 80;

/// `2024-05-01T12:34:56Z` -> `2024-05-01 12:34`. Unrecognized input is
/// returned unchanged.
#[must_use]
pub fn format_created_at(raw: &str) -> String {
    match (raw.get(..10), raw.get(10..11), raw.get(11..16)) {
        (Some(date), Some("T"), Some(clock)) => format!("{date} {clock}"),
        _ => raw.to_owned(),
    }
}

#[must_use]
pub fn action_class(action: &str) -> &'static str {
    match action.to_ascii_uppercase().as_str() {
        "INSERT" | "CREATE" => "audit-action audit-action--create",
        "UPDATE" => "audit-action audit-action--update",
        "DELETE" => "audit-action audit-action--delete",
        _ => "audit-action",
    }
}

/// One-line preview of a change payload, truncated on a char boundary.
#[must_use]
pub fn summarize_changes(changes: &serde_json::Value) -> String {
    if changes.is_null() {
        return "-".to_owned();
    }
    let text = changes.to_string();
    if text.chars().count() <= CHANGES_PREVIEW_CHARS {
        return text;
    }
    let mut preview: String = text.chars().take(CHANGES_PREVIEW_CHARS).collect();
    preview.push('…');
    preview
}

#[component]
pub fn AuditLogTable(logs: Signal<Vec<AuditLog>>) -> impl IntoView {
    view! {
        <table class="audit-table">
            <thead>
                <tr>
                    <th>"When"</th>
                    <th>"Action"</th>
                    <th>"Table"</th>
                    <th>"Record"</th>
                    <th>"User"</th>
                    <th>"Changes"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || logs.get()
                    key=|log| log.id.clone()
                    children=move |log: AuditLog| {
                        view! {
                            <tr class="audit-table__row">
                                <td class="audit-table__time" title=log.created_at.clone()>
                                    {format_created_at(&log.created_at)}
                                </td>
                                <td>
                                    <span class=action_class(&log.action)>{log.action.clone()}</span>
                                </td>
                                <td>{log.table_name.clone()}</td>
                                <td class="audit-table__mono">{log.record_id.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                <td class="audit-table__mono">{log.user_id.clone().unwrap_or_else(|| "-".to_owned())}</td>
                                <td class="audit-table__changes">{summarize_changes(&log.changes)}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
