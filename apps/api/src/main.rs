mod careers;
mod chat;
mod config;
mod errors;
mod llm_client;
mod personality;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::careers::catalog::CareerCatalog;
use crate::config::Config;
use crate::llm_client::HfInferenceClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Career Guide API v{}", env!("CARGO_PKG_VERSION"));

    // Static tables are built once and shared read-only
    let catalog = CareerCatalog::builtin()?;
    info!(
        "Career catalog loaded: {} skills, {} personality types",
        catalog.skill_count(),
        catalog.type_count()
    );

    let assistant = HfInferenceClient::new(config.hf_api_url.clone(), config.hf_token.clone())?;
    info!("Inference client initialized (endpoint: {})", assistant.api_url());

    let state = AppState {
        catalog: Arc::new(catalog),
        assistant: Arc::new(assistant),
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
