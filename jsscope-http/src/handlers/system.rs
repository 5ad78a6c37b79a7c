use axum::{extract::State, http::StatusCode, response::Json};

use crate::{models::SystemInfo, server::AppState, telemetry};

/// Get system information
///
/// Returns the server version, the active analyzer configuration and the
/// current heap usage.
#[utoipa::path(
    get,
    path = "/api/v1/system/info",
    responses(
        (status = 200, description = "System information", body = SystemInfo)
    )
)]
#[axum::debug_handler]
pub async fn get_system_info(State(state): State<AppState>) -> Json<SystemInfo> {
    Json(SystemInfo {
        version: env!("CARGO_PKG_VERSION").to_string(),
        tokenizer: state.config.tokenizer,
        validator: state.config.validator,
        max_source_bytes: state.config.max_source_bytes,
        memory_usage: telemetry::memory_usage(),
    })
}

/// Health check endpoint for container health monitoring
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Server is up")
    )
)]
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
