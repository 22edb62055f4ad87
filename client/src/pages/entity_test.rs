use super::*;
use serde_json::json;

#[test]
fn config_preview_skips_empty_values() {
    assert_eq!(config_preview(&serde_json::Value::Null), None);
    assert_eq!(config_preview(&json!({})), None);
}

#[test]
fn config_preview_pretty_prints_objects() {
    let preview = config_preview(&json!({ "columns": ["name"] })).unwrap_or_default();
    assert!(preview.contains("\"columns\""));
    assert!(preview.contains('\n'));
}
