use super::*;

#[test]
fn from_parts_defaults_to_local_platform_and_root_assets() {
    let cfg = ClientConfig::from_parts(None, None, None);
    assert_eq!(cfg.platform.url, DEFAULT_PLATFORM_URL);
    assert_eq!(cfg.platform.anon_key, "");
    assert_eq!(cfg.base_path, "");
}

#[test]
fn from_parts_normalizes_base_path() {
    assert_eq!(ClientConfig::from_parts(None, None, Some("app/")).base_path, "/app");
    assert_eq!(ClientConfig::from_parts(None, None, Some("/static/app")).base_path, "/static/app");
    assert_eq!(ClientConfig::from_parts(None, None, Some("/")).base_path, "");
}

#[test]
fn from_parts_trims_platform_url() {
    let cfg = ClientConfig::from_parts(Some("https://p.example.test/"), Some("anon"), None);
    assert_eq!(cfg.platform.url, "https://p.example.test");
    assert_eq!(cfg.platform.anon_key, "anon");
}
