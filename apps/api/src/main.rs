use anyhow::Result;
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use skillgraph_api::config::Config;
use skillgraph_api::routes::build_router;
use skillgraph_api::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("skillgraph_api={}", &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillgraph API v{}", env!("CARGO_PKG_VERSION"));

    match config.evaluation_date {
        Some(date) => info!("Evaluation date pinned to {date}"),
        None => info!("Evaluation date follows the system clock"),
    }
    info!(
        "Default placement: industry '{}', job role '{}'",
        config.default_industry, config.default_job_role
    );

    // In-memory graph backend
    let state = AppState::in_memory(config.clone());
    info!("In-memory graph store initialized");

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
