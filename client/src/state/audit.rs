//! Audit-log viewer state backing `use_audit_log`.
//!
//! DESIGN
//! ======
//! Each fetch is tagged with a request sequence number. A response only
//! lands if it answers the newest request, so a slow reply for a previous
//! tenant can never overwrite the current one. `logs` is empty while a
//! request is in flight. Query errors leave `logs` empty and surface
//! separately through `error`.

#[cfg(test)]
#[path = "audit_test.rs"]
mod audit_test;

use platform::{AUDIT_LOG_LIMIT, AuditLog};

#[derive(Clone, Debug, Default)]
pub struct AuditLogState {
    pub logs: Vec<AuditLog>,
    pub loading: bool,
    pub error: Option<String>,
    request_seq: u64,
}

impl AuditLogState {
    /// Start a fetch and return its sequence number. Rows from the previous
    /// query are dropped so `logs` stays empty while loading.
    pub fn begin(&mut self) -> u64 {
        self.request_seq += 1;
        self.loading = true;
        self.logs.clear();
        self.error = None;
        self.request_seq
    }

    /// Apply the result for request `seq`. Returns `false` when the result
    /// is stale and was ignored.
    pub fn finish(&mut self, seq: u64, result: Result<Vec<AuditLog>, String>) -> bool {
        if seq != self.request_seq {
            return false;
        }
        self.loading = false;
        match result {
            Ok(mut logs) => {
                logs.truncate(AUDIT_LOG_LIMIT);
                self.logs = logs;
                self.error = None;
            }
            Err(message) => {
                self.logs.clear();
                self.error = Some(message);
            }
        }
        true
    }
}

/// Logs whose action, table, record, or user contains `query`
/// (case-insensitive). A blank query keeps everything.
#[must_use]
pub fn filter_logs(logs: &[AuditLog], query: &str) -> Vec<AuditLog> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return logs.to_vec();
    }
    logs.iter()
        .filter(|log| {
            [Some(&log.action), Some(&log.table_name), log.record_id.as_ref(), log.user_id.as_ref()]
                .into_iter()
                .flatten()
                .any(|field| field.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}
