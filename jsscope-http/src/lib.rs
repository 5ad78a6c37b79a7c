//! jsscope HTTP API Server
//!
//! Exposes the analysis pipeline of `jsscope-core` over HTTP:
//!
//! * `POST /analyze`: validate, tokenize and optimize a snippet
//! * `GET /health`: liveness probe
//! * `GET /api/v1/system/info`: version and analyzer settings
//! * `GET /api-docs/openapi.json`: OpenAPI document

pub mod error;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod server;
pub mod telemetry;

use server::{ServerConfig, start_server};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Installs the global tracing subscriber. `RUST_LOG` wins over
/// `default_level` when set.
pub fn init_tracing(default_level: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()))
        .with(fmt::layer())
        .init();
}

/// Start the jsscope HTTP server with the default configuration
pub async fn start() -> Result<(), Box<dyn std::error::Error>> {
    start_server(ServerConfig::default()).await
}

/// Start the jsscope HTTP server with a custom configuration
pub async fn start_with_config(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    start_server(config).await
}
