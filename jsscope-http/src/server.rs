use std::{net::SocketAddr, path::Path, sync::Arc};

use axum::{
    Router,
    http::{Method, header},
};
use jsscope_core::{InternalResult, analysis::Analyzer, config::AnalyzerConfig};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::routes::create_api_router;

/// Server configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Analyzer configuration
    #[serde(default)]
    pub analyzer: AnalyzerConfig,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            analyzer: AnalyzerConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Loads a JSON configuration file; missing fields take their defaults.
    pub fn from_file<P: AsRef<Path>>(path: P) -> InternalResult<Self> {
        jsscope_core::config::from_file(path)
    }
}

/// Shared, read-only request state
#[derive(Debug, Clone)]
pub struct AppState {
    pub analyzer: Arc<Analyzer>,
    pub config: Arc<AnalyzerConfig>,
}

impl AppState {
    pub fn new(config: AnalyzerConfig) -> Self {
        Self {
            analyzer: Arc::new(Analyzer::from_config(&config)),
            config: Arc::new(config),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(AnalyzerConfig::default())
    }
}

/// Router with state, tracing and CORS applied
pub fn build_app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    create_api_router()
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

/// Start the HTTP server
pub async fn start_server(config: ServerConfig) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config.analyzer.clone());
    info!(
        "Analyzer ready: validator={}, tokenizer={}, max_source_bytes={}",
        config.analyzer.validator, config.analyzer.tokenizer, config.analyzer.max_source_bytes
    );

    let app = build_app(state);

    // Parse the socket address
    let addr = format!("{}:{}", config.host, config.port).parse::<SocketAddr>()?;

    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
