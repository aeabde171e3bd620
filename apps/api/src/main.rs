mod config;
mod errors;
mod extraction;
mod job;
mod resume;
mod routes;
mod skills;
mod state;
mod uploads;
mod views;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting skillscan v{}", env!("CARGO_PKG_VERSION"));

    // Build app state (vocabulary + compiled templates)
    let state = AppState::new(config.clone()).context("Failed to compile HTML templates")?;
    info!("Skill vocabulary loaded ({} skills)", state.vocabulary.len());

    // Uploads directory must exist before the first request
    state
        .uploads
        .ensure_dir()
        .await
        .with_context(|| format!("Cannot create {}", state.uploads.dir().display()))?;

    // Build router
    let app = build_router(state).layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
