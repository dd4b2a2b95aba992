// crates/server/src/main.rs
//! Studiobridge server binary.
//!
//! Wires the asset generator from the environment, builds the relay
//! state, and serves the plugin protocol plus the prompt-fulfillment
//! API on one port.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use studiobridge_core::llm::{DisabledGenerator, GeneratorConfig, RemoteGenerator};
use studiobridge_core::AssetGenerator;
use studiobridge_server::{create_app, AppState};
use tracing_subscriber::EnvFilter;

/// Default port for the server.
const DEFAULT_PORT: u16 = 47901;

/// Get the server port from environment or use default.
fn get_port() -> u16 {
    std::env::var("STUDIOBRIDGE_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT)
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,studiobridge=info,studiobridge_server=info".into()),
        )
        .init();

    let config = GeneratorConfig::from_env();
    let generator: Arc<dyn AssetGenerator> = match RemoteGenerator::from_config(&config)? {
        Some(remote) => Arc::new(remote),
        None => {
            tracing::warn!("STUDIOBRIDGE_LLM_URL not set; /api/generate will return 503");
            Arc::new(DisabledGenerator)
        }
    };
    tracing::info!(generator = generator.name(), "asset generator ready");

    let state = AppState::new(generator);
    let app = create_app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], get_port()));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("studiobridge listening on {addr}");
    axum::serve(listener, app).await?;
    Ok(())
}
