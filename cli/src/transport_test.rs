use super::*;

fn config() -> PlatformConfig {
    PlatformConfig::new("https://example.test/", "anon-key")
}

#[test]
fn reqwest_method_maps_every_variant() {
    assert_eq!(reqwest_method(Method::Get), reqwest::Method::GET);
    assert_eq!(reqwest_method(Method::Post), reqwest::Method::POST);
    assert_eq!(reqwest_method(Method::Put), reqwest::Method::PUT);
}

#[test]
fn bearer_value_prefers_session_token() {
    let mut request = PlatformRequest::new(Method::Get, "/auth/v1/user");
    assert_eq!(bearer_value(&config(), &request), "Bearer anon-key");

    request.bearer = Some("session-token".to_owned());
    assert_eq!(bearer_value(&config(), &request), "Bearer session-token");
}

#[test]
fn new_builds_client() {
    assert!(ReqwestTransport::new(config()).is_ok());
}

#[test]
fn build_encodes_query_pairs() {
    let transport = ReqwestTransport::new(config()).expect("transport");
    let mut request = PlatformRequest::new(Method::Get, "/rest/v1/audit_logs");
    request.query = vec![("tenant_id".to_owned(), "eq.a b&c".to_owned()), ("select".to_owned(), "*".to_owned())];

    let built = transport.build(&request).build().expect("request");

    assert_eq!(built.url().path(), "/rest/v1/audit_logs");
    assert_eq!(built.url().query(), Some("tenant_id=eq.a+b%26c&select=*"));
    let pairs: Vec<(String, String)> = built.url().query_pairs().into_owned().collect();
    assert_eq!(pairs[0], ("tenant_id".to_owned(), "eq.a b&c".to_owned()));
    assert_eq!(built.headers()["apikey"], "anon-key");
}
