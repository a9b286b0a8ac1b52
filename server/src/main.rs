//! Host server binary for the task front-end.

use anyhow::Context;
use clap::Parser;
use task_server::config::ServerConfig;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::parse();
    let frontend = config.frontend();

    if config.probe_api {
        // Failures are logged; the page is still served.
        let _ = task_server::probe_api(&frontend).await;
    }

    let app = task_server::router(frontend);

    let listener = tokio::net::TcpListener::bind(config.addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.addr))?;

    tracing::info!(
        addr = %config.addr,
        api = %config.api_base_url,
        "Serving task front-end on http://{}",
        config.addr
    );

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
