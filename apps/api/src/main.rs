mod config;
mod cors;
mod errors;
mod llm_client;
mod petition;
mod routes;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::trace::TraceLayer;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Petition API v{}", env!("CARGO_PKG_VERSION"));

    // A missing key is not fatal: requests fail with a configuration error until it is set.
    if !config.has_api_key() {
        error!("API_KEY is not set; petition generation will fail until it is configured");
    }

    let llm = GeminiClient::new(config.api_key.clone(), config.gemini_base_url.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);
    info!("Allowed origins: {}", config.allowed_origins.join(", "));

    let state = AppState {
        config: config.clone(),
        generator: Arc::new(llm),
    };

    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
