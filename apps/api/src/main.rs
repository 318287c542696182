mod ats;
mod career;
mod config;
mod errors;
mod i18n;
mod images;
mod interview;
mod llm_client;
mod resume;
mod routes;
mod state;
mod theme;
mod upload;
mod workspace;

use anyhow::Result;
use std::net::SocketAddr;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::workspace::WorkspaceStore;

const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Masari API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(&config);
    info!(
        "LLM client initialized (text model: {}, image model: {})",
        llm_client::TEXT_MODEL,
        llm_client::IMAGE_MODEL
    );
    info!(
        "Default language: {}, upload limit: {} bytes",
        config.default_language, config.max_upload_bytes
    );

    let workspaces = WorkspaceStore::new();
    let ttl = Duration::from_secs(config.workspace_ttl_secs);
    workspaces.spawn_sweeper(ttl, SWEEP_INTERVAL.min(ttl));
    info!("Idle workspaces evicted after {}s", config.workspace_ttl_secs);

    let state = AppState {
        llm,
        workspaces,
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
