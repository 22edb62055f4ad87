//! Operator CLI for the dashboard's backend platform.
//!
//! Every command goes through the same `platform` client the UI uses, over
//! a `reqwest` transport. Results print as JSON on stdout; logs go to stderr.

mod transport;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use clap::{Args, Parser, Subcommand};
use platform::{PlatformClient, PlatformConfig, PlatformError, WebhookClientPayload, WebhookOutcome, WebhookRelay};
use serde_json::Value;

use crate::transport::ReqwestTransport;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("missing access token; pass --access-token or set PLATFORM_ACCESS_TOKEN")]
    MissingAccessToken,
    #[error(transparent)]
    Platform(#[from] PlatformError),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("webhook {event} failed: {message}")]
    WebhookFailed { event: String, message: String },
}

#[derive(Parser, Debug)]
#[command(name = "dashboard-cli", about = "Dashboard platform CLI")]
struct Cli {
    #[arg(long, env = "PLATFORM_URL")]
    url: String,

    #[arg(long, env = "PLATFORM_ANON_KEY", hide_env_values = true)]
    anon_key: String,

    #[arg(long, env = "PLATFORM_ACCESS_TOKEN", hide_env_values = true)]
    access_token: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    Auth(AuthCommand),
    Audit(AuditCommand),
    Routes(RoutesCommand),
    Webhook(WebhookCommand),
    Password(PasswordCommand),
}

#[derive(Args, Debug)]
struct AuthCommand {
    #[command(subcommand)]
    command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuthSubcommand {
    /// Sign in and print the session.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "PLATFORM_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Print the user behind the access token.
    Whoami,
    Logout,
}

#[derive(Args, Debug)]
struct AuditCommand {
    #[command(subcommand)]
    command: AuditSubcommand,
}

#[derive(Subcommand, Debug)]
enum AuditSubcommand {
    /// Newest 100 audit records.
    List {
        #[arg(long)]
        tenant: Option<String>,
    },
}

#[derive(Args, Debug)]
struct RoutesCommand {
    #[command(subcommand)]
    command: RoutesSubcommand,
}

#[derive(Subcommand, Debug)]
enum RoutesSubcommand {
    List {
        #[arg(long)]
        tenant: Option<String>,
    },
}

#[derive(Args, Debug)]
struct WebhookCommand {
    #[command(subcommand)]
    command: WebhookSubcommand,
}

#[derive(Subcommand, Debug)]
enum WebhookSubcommand {
    Dispatch(DispatchArgs),
}

#[derive(Args, Debug)]
struct DispatchArgs {
    #[arg(long)]
    event: String,
    #[arg(long)]
    entity: String,
    #[arg(long)]
    tenant: String,
    #[arg(long, default_value = "{}", help = "JSON event data")]
    data: String,
    #[arg(long)]
    user: Option<String>,
}

#[derive(Args, Debug)]
struct PasswordCommand {
    #[command(subcommand)]
    command: PasswordSubcommand,
}

#[derive(Subcommand, Debug)]
enum PasswordSubcommand {
    Change {
        #[arg(long, env = "PLATFORM_NEW_PASSWORD", hide_env_values = true)]
        new_password: String,
    },
}

type CliClient = PlatformClient<ReqwestTransport>;

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();
    let config = PlatformConfig::new(&cli.url, &cli.anon_key);
    let client = PlatformClient::new(ReqwestTransport::new(config)?).with_access_token(cli.access_token);

    match cli.command {
        Command::Auth(auth) => run_auth(&client, auth).await,
        Command::Audit(audit) => run_audit(&client, audit).await,
        Command::Routes(routes) => run_routes(&client, routes).await,
        Command::Webhook(webhook) => run_webhook(client, webhook).await,
        Command::Password(password) => run_password(&client, password).await,
    }
}

async fn run_auth(client: &CliClient, auth: AuthCommand) -> Result<(), CliError> {
    match auth.command {
        AuthSubcommand::Login { email, password } => {
            let session = client.sign_in_with_password(&email, &password).await?;
            print_json(&serde_json::to_value(session)?)
        }
        AuthSubcommand::Whoami => {
            require_token(client)?;
            let user = client.fetch_current_user().await?;
            print_json(&serde_json::to_value(user)?)
        }
        AuthSubcommand::Logout => {
            require_token(client)?;
            client.sign_out().await?;
            println!("ok");
            Ok(())
        }
    }
}

async fn run_audit(client: &CliClient, audit: AuditCommand) -> Result<(), CliError> {
    match audit.command {
        AuditSubcommand::List { tenant } => {
            let logs = client.fetch_audit_logs(tenant.as_deref()).await?;
            tracing::info!(count = logs.len(), "fetched audit logs");
            print_json(&serde_json::to_value(logs)?)
        }
    }
}

async fn run_routes(client: &CliClient, routes: RoutesCommand) -> Result<(), CliError> {
    match routes.command {
        RoutesSubcommand::List { tenant } => {
            let routes = client.fetch_entity_routes(tenant.as_deref()).await?;
            print_json(&serde_json::to_value(routes)?)
        }
    }
}

async fn run_webhook(client: CliClient, webhook: WebhookCommand) -> Result<(), CliError> {
    match webhook.command {
        WebhookSubcommand::Dispatch(args) => {
            let payload = dispatch_payload(&args)?;
            let outcome = WebhookRelay::new(client).dispatch(payload).await;
            outcome_result(outcome)
        }
    }
}

async fn run_password(client: &CliClient, password: PasswordCommand) -> Result<(), CliError> {
    match password.command {
        PasswordSubcommand::Change { new_password } => {
            require_token(client)?;
            client.change_own_password(&new_password).await?;
            println!("ok");
            Ok(())
        }
    }
}

fn require_token(client: &CliClient) -> Result<(), CliError> {
    client.access_token().map(|_| ()).ok_or(CliError::MissingAccessToken)
}

fn dispatch_payload(args: &DispatchArgs) -> Result<WebhookClientPayload, CliError> {
    let data = serde_json::from_str::<Value>(&args.data)?;
    Ok(WebhookClientPayload::new(&args.event, &args.entity, data, &args.tenant).with_user(args.user.clone()))
}

fn outcome_result(outcome: WebhookOutcome) -> Result<(), CliError> {
    match outcome {
        WebhookOutcome::Delivered { event, timestamp } => {
            println!("delivered {event} at {timestamp}");
            Ok(())
        }
        WebhookOutcome::Failed { event, message } => Err(CliError::WebhookFailed { event, message }),
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
