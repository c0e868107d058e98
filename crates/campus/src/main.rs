//! Campus server binary: load settings, wire the store / executor / agent,
//! and serve the HTTP API until interrupted.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use campus_agent::{GeminiAgent, GeminiConfig};
use campus_runtime::TurnExecutor;
use campus_server::AppState;
use campus_sessions::SessionStore;
use campus_settings::{load_settings, load_settings_from_path};

#[derive(Parser)]
#[command(name = "campus", about = "Session-scoped conversational agent over HTTP", version)]
struct Cli {
    /// Settings file (default: ~/.campus/settings.json, if present).
    #[arg(long)]
    settings: Option<PathBuf>,

    /// Bind address override.
    #[arg(long)]
    host: Option<String>,

    /// Bind port override.
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut settings = match &cli.settings {
        Some(path) => load_settings_from_path(path)
            .with_context(|| format!("failed to load settings from {}", path.display()))?,
        None => load_settings().context("failed to load settings")?,
    };
    if let Some(host) = cli.host {
        settings.server.host = host;
    }
    if let Some(port) = cli.port {
        settings.server.port = port;
    }

    let api_key = settings
        .agent
        .api_key
        .clone()
        .context("no Gemini API key configured; set GOOGLE_API_KEY")?;

    let store = Arc::new(SessionStore::new());
    let agent = Arc::new(GeminiAgent::new(GeminiConfig::new(
        api_key,
        settings.agent.model.clone(),
    )));
    let mut executor = TurnExecutor::new(Arc::clone(&store), agent);
    if let Some(ms) = settings.agent.turn_timeout_ms {
        executor = executor.with_deadline(Duration::from_millis(ms));
    }

    let state = AppState::new(settings.app_name.as_str(), store, Arc::new(executor));
    let app = campus_server::router(state);

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port)
        .parse()
        .context("invalid bind address")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(%addr, model = %settings.agent.model, app = %settings.app_name, "campus server listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    info!("shutdown signal received");
}
