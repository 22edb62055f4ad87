use super::*;

fn log(id: &str, action: &str, table: &str) -> AuditLog {
    AuditLog {
        id: id.to_owned(),
        action: action.to_owned(),
        table_name: table.to_owned(),
        record_id: Some(format!("rec-{id}")),
        tenant_id: Some("t-1".to_owned()),
        user_id: Some("u-ada".to_owned()),
        changes: serde_json::Value::Null,
        created_at: "2026-01-01T00:00:00Z".to_owned(),
    }
}

// =============================================================
// Request lifecycle
// =============================================================

#[test]
fn default_state_is_empty_and_idle() {
    let state = AuditLogState::default();
    assert!(state.logs.is_empty());
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn begin_marks_loading_and_clears_error() {
    let mut state = AuditLogState { error: Some("old".to_owned()), ..AuditLogState::default() };
    state.begin();
    assert!(state.loading);
    assert!(state.error.is_none());
    assert!(state.logs.is_empty());
}

#[test]
fn begin_drops_rows_from_previous_query() {
    let mut state = AuditLogState::default();
    let seq = state.begin();
    state.finish(seq, Ok(vec![log("tenant-a-row", "INSERT", "customers")]));
    assert_eq!(state.logs.len(), 1);

    state.begin();
    assert!(state.loading);
    assert!(state.logs.is_empty(), "logs while loading: {:?}", state.logs.iter().map(|l| &l.id).collect::<Vec<_>>());
}

#[test]
fn finish_applies_current_result() {
    let mut state = AuditLogState::default();
    let seq = state.begin();
    assert!(state.finish(seq, Ok(vec![log("1", "INSERT", "customers")])));
    assert!(!state.loading);
    assert_eq!(state.logs.len(), 1);
}

#[test]
fn finish_ignores_stale_result() {
    let mut state = AuditLogState::default();
    let stale = state.begin();
    let current = state.begin();
    assert!(!state.finish(stale, Ok(vec![log("old", "INSERT", "customers")])));
    assert!(state.loading);
    assert!(state.finish(current, Ok(vec![])));
    assert!(state.logs.is_empty());
}

#[test]
fn finish_error_degrades_to_empty_list() {
    let mut state = AuditLogState::default();
    let seq = state.begin();
    state.finish(seq, Ok(vec![log("1", "INSERT", "customers")]));
    let seq = state.begin();
    state.finish(seq, Err("permission denied".to_owned()));
    assert!(state.logs.is_empty());
    assert_eq!(state.error.as_deref(), Some("permission denied"));
    assert!(!state.loading);
}

#[test]
fn finish_caps_rows_at_limit() {
    let mut state = AuditLogState::default();
    let seq = state.begin();
    let rows = (0..AUDIT_LOG_LIMIT + 10).map(|i| log(&i.to_string(), "UPDATE", "orders")).collect();
    state.finish(seq, Ok(rows));
    assert_eq!(state.logs.len(), AUDIT_LOG_LIMIT);
}

// =============================================================
// Filtering
// =============================================================

#[test]
fn filter_logs_blank_query_keeps_all() {
    let logs = vec![log("1", "INSERT", "customers"), log("2", "DELETE", "orders")];
    assert_eq!(filter_logs(&logs, "   ").len(), 2);
}

#[test]
fn filter_logs_matches_case_insensitively_across_fields() {
    let logs = vec![log("1", "INSERT", "customers"), log("2", "DELETE", "orders")];
    let by_table = filter_logs(&logs, "ORDERS");
    assert_eq!(by_table.len(), 1);
    assert_eq!(by_table[0].id, "2");

    let by_record = filter_logs(&logs, "rec-1");
    assert_eq!(by_record.len(), 1);
    assert_eq!(by_record[0].id, "1");

    assert_eq!(filter_logs(&logs, "ada").len(), 2);
    assert!(filter_logs(&logs, "missing").is_empty());
}
