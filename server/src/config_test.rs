use std::collections::HashMap;

use super::*;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).expect("config");
    assert_eq!(config.port, DEFAULT_PORT);
    assert_eq!(config.listen_addr(), "0.0.0.0:3000");
}

#[test]
fn reads_port_and_bind_addr() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", " 8080 "), ("BIND_ADDR", "127.0.0.1")])).expect("config");
    assert_eq!(config.listen_addr(), "127.0.0.1:8080");
}

#[test]
fn blank_port_falls_back_to_default() {
    let config = ServerConfig::from_lookup(lookup(&[("PORT", "  ")])).expect("config");
    assert_eq!(config.port, DEFAULT_PORT);
}

#[test]
fn invalid_port_is_rejected() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).expect_err("invalid");
    assert!(matches!(err, ServerError::InvalidPort(ref raw) if raw == "http"));
}
