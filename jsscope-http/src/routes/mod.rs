pub mod system;

use crate::handlers;
use crate::models::{AnalysisResponse, AnalyzeRequest, SystemInfo, TokenView};
use crate::server::AppState;
use axum::{
    Json, Router,
    routing::{get, post},
};
use jsscope_core::{
    classifier::ErrorCategory, config::ValidatorKind, tokenizer::TokenizerMode,
    tokenizer::token::TokenKind,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::analyze::analyze,
        handlers::system::get_system_info,
        handlers::system::health_check
    ),
    components(schemas(
        AnalyzeRequest,
        AnalysisResponse,
        TokenView,
        TokenKind,
        ErrorCategory,
        SystemInfo,
        TokenizerMode,
        ValidatorKind
    )),
    tags(
        (name = "jsscope", description = "JavaScript/TypeScript snippet analysis")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server"),
    )
)]
pub struct ApiDoc;

/// Create the main API router with state
pub fn create_api_router() -> Router<AppState> {
    Router::new()
        .route("/api-docs/openapi.json", get(openapi_document))
        .route("/health", get(handlers::health_check))
        .route(
            "/analyze",
            post(handlers::analyze).options(handlers::analyze_preflight),
        )
        .nest("/api/v1", api_v1_router())
}

/// Create the v1 API router with state
fn api_v1_router() -> Router<AppState> {
    Router::new().merge(system::routes())
}

async fn openapi_document() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
