use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};

use crate::{
    error::AppError,
    models::{AnalysisResponse, AnalyzeRequest},
    server::AppState,
    telemetry,
};

/// Analyze a snippet
///
/// Validates the code and, when it is valid, returns its tokens and an
/// optimized copy. Invalid code is still a `200` response with
/// `isValid: false`.
#[utoipa::path(
    post,
    path = "/analyze",
    request_body = AnalyzeRequest,
    responses(
        (status = 200, description = "Code analyzed", body = AnalysisResponse),
        (status = 400, description = "Malformed request body"),
        (status = 413, description = "Code exceeds the configured size limit"),
        (status = 500, description = "Internal server error")
    )
)]
pub async fn analyze(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalysisResponse>, AppError> {
    let Json(request) = payload?;

    let limit = state.config.max_source_bytes;
    if request.code.len() > limit {
        return Err(AppError::PayloadTooLarge {
            size: request.code.len(),
            limit,
        });
    }

    let analyzer = state.analyzer.clone();
    let result = tokio::task::spawn_blocking(move || analyzer.analyze(&request.code))
        .await
        .map_err(|e| AppError::Internal(format!("Analysis task failed: {}", e)))?;

    Ok(Json(AnalysisResponse::from_result(
        result,
        telemetry::memory_usage(),
    )))
}

/// CORS preflight for `/analyze`
pub async fn analyze_preflight() -> StatusCode {
    StatusCode::OK
}
