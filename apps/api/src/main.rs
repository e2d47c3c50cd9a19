mod config;
mod data;
mod errors;
mod recommendations;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use axum::http::{header, HeaderValue, Method};
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::data::DataContext;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Locator API v{}", env!("CARGO_PKG_VERSION"));

    // Both tables are loaded once and shared read-only for the life of the process.
    let data = DataContext::load(&config.rent_data_path, &config.jobs_data_path)
        .context("failed to load location datasets")?;
    info!(
        "Data context ready: {} rent rows, {} job postings",
        data.rents.len(),
        data.jobs.len()
    );

    let cors = build_cors(&config)?;

    let state = AppState {
        data: Arc::new(data),
        config: config.clone(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Restricts CORS to the configured dashboard origins, or allows any origin when none are set.
fn build_cors(config: &Config) -> Result<CorsLayer> {
    if config.cors_allowed_origins.is_empty() {
        return Ok(CorsLayer::permissive());
    }

    let origins = config
        .cors_allowed_origins
        .iter()
        .map(|o| {
            o.parse::<HeaderValue>()
                .with_context(|| format!("invalid CORS origin '{o}'"))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE]))
}
