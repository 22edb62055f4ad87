//! SSR host for the dashboard UI.

#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("invalid PORT value: {0}")]
    InvalidPort(String),
    #[error("leptos configuration: {0}")]
    Leptos(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let app = routes::app()?;
    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;

    tracing::info!(addr = %config.listen_addr(), "dashboard listening");
    axum::serve(listener, app).await?;
    Ok(())
}
