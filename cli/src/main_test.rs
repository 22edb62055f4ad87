use clap::Parser;
use serde_json::json;

use super::*;

fn parse(args: &[&str]) -> Cli {
    let mut argv = vec!["dashboard-cli", "--url", "https://example.test", "--anon-key", "anon"];
    argv.extend_from_slice(args);
    Cli::try_parse_from(argv).expect("parse")
}

fn dispatch_args(data: &str) -> DispatchArgs {
    DispatchArgs {
        event: "record.created".to_owned(),
        entity: "customer".to_owned(),
        tenant: "t-1".to_owned(),
        data: data.to_owned(),
        user: Some("u-1".to_owned()),
    }
}

#[test]
fn parses_audit_list_with_tenant() {
    let cli = parse(&["audit", "list", "--tenant", "t-1"]);
    let Command::Audit(AuditCommand { command: AuditSubcommand::List { tenant } }) = cli.command else {
        panic!("expected audit list");
    };
    assert_eq!(tenant.as_deref(), Some("t-1"));
}

#[test]
fn parses_webhook_dispatch_with_default_data() {
    let cli = parse(&["webhook", "dispatch", "--event", "e", "--entity", "x", "--tenant", "t"]);
    let Command::Webhook(WebhookCommand { command: WebhookSubcommand::Dispatch(args) }) = cli.command else {
        panic!("expected webhook dispatch");
    };
    assert_eq!(args.data, "{}");
    assert_eq!(args.user, None);
}

#[test]
fn dispatch_payload_parses_data_and_user() {
    let payload = dispatch_payload(&dispatch_args(r#"{"id": 7}"#)).expect("payload");
    assert_eq!(payload.event, "record.created");
    assert_eq!(payload.data, json!({ "id": 7 }));
    assert_eq!(payload.user_id.as_deref(), Some("u-1"));
    assert_eq!(payload.timestamp, None);
}

#[test]
fn dispatch_payload_rejects_invalid_json() {
    let err = dispatch_payload(&dispatch_args("{not json")).expect_err("invalid");
    assert!(matches!(err, CliError::InvalidJson(_)));
}

#[test]
fn outcome_result_maps_failure_to_error() {
    let failed = WebhookOutcome::Failed { event: "e".to_owned(), message: "boom".to_owned() };
    let err = outcome_result(failed).expect_err("failed");
    assert_eq!(err.to_string(), "webhook e failed: boom");

    let delivered = WebhookOutcome::Delivered { event: "e".to_owned(), timestamp: "now".to_owned() };
    assert!(outcome_result(delivered).is_ok());
}

#[test]
fn require_token_reports_missing_token() {
    let config = PlatformConfig::new("https://example.test", "anon");
    let client = PlatformClient::new(ReqwestTransport::new(config).expect("transport"));
    assert!(matches!(require_token(&client), Err(CliError::MissingAccessToken)));
    let client = client.with_access_token(Some("tok".to_owned()));
    assert!(require_token(&client).is_ok());
}
