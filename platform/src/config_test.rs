use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_reads_both_variables() {
    let cfg = PlatformConfig::from_lookup(lookup_from(&[
        ("PLATFORM_URL", "https://project.example.test/"),
        ("PLATFORM_ANON_KEY", " anon-key "),
    ]))
    .unwrap();
    assert_eq!(cfg.url, "https://project.example.test");
    assert_eq!(cfg.anon_key, "anon-key");
}

#[test]
fn from_lookup_reports_missing_url_first() {
    let err = PlatformConfig::from_lookup(lookup_from(&[])).unwrap_err();
    assert!(matches!(err, PlatformError::MissingConfig { ref var } if var == "PLATFORM_URL"));
}

#[test]
fn from_lookup_treats_blank_key_as_missing() {
    let err = PlatformConfig::from_lookup(lookup_from(&[
        ("PLATFORM_URL", "https://project.example.test"),
        ("PLATFORM_ANON_KEY", "   "),
    ]))
    .unwrap_err();
    assert_eq!(err.to_string(), "missing configuration: PLATFORM_ANON_KEY");
}

#[test]
fn new_trims_repeated_trailing_slashes() {
    assert_eq!(PlatformConfig::new("http://localhost:54321//", "k").url, "http://localhost:54321");
}
