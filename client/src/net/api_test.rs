use futures::executor::block_on;
use platform::Method;

use super::*;

fn config() -> ClientConfig {
    ClientConfig::from_parts(Some("https://p.example.test"), Some("anon-key"), None)
}

#[test]
fn bearer_header_prefers_session_token() {
    let mut request = PlatformRequest::new(Method::Get, "/auth/v1/user");
    request.bearer = Some("jwt-1".to_owned());
    assert_eq!(bearer_header(&config().platform, &request), "Bearer jwt-1");
}

#[test]
fn bearer_header_falls_back_to_anon_key() {
    let request = PlatformRequest::new(Method::Get, "/rest/v1/audit_logs");
    assert_eq!(bearer_header(&config().platform, &request), "Bearer anon-key");
}

#[test]
fn platform_client_carries_access_token() {
    let client = platform_client(&config(), Some("jwt-1".to_owned()));
    assert_eq!(client.access_token(), Some("jwt-1"));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_transport_is_unavailable_off_browser() {
    let client = platform_client(&config(), None);
    let result = block_on(client.fetch_audit_logs(None));
    assert!(matches!(result, Err(PlatformError::Unavailable)));
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn sign_in_reports_unavailable_off_browser() {
    let result = block_on(sign_in(&config(), "ada@example.com", "pw"));
    assert_eq!(result, Err("not available on this target".to_owned()));
}
