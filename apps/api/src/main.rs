mod config;
mod errors;
mod export;
mod generation;
mod ingest;
mod llm_client;
mod routes;
mod scrape;
mod segment;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{obscure_key, Config};
use crate::llm_client::OpenAiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
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

    info!("Starting Coverdraft API v{}", env!("CARGO_PKG_VERSION"));

    // The credential is optional at startup: completion calls fail later if
    // it stays unset, but fetch/parse previews keep working.
    match &config.openai_api_key {
        Some(key) => info!("API key loaded: {}", obscure_key(key)),
        None => warn!("OPENAI_API_KEY not set; generation endpoints will fail until configured"),
    }

    // HTTP client for posting-page fetches
    let http = reqwest::Client::new();

    // Completion client
    let completion = Arc::new(OpenAiClient::new(config.openai_api_key.clone()));
    info!("completion client initialized (model: {})", llm_client::MODEL);

    let state = AppState { http, completion };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
