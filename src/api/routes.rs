//! HTTP route handlers for Axum.

use axum::{extract::State, http::StatusCode, Json};
use tracing::warn;

use crate::{
    api::types::{AnalyzeRequest, ClassifyRequest, ErrorDto, HealthDto},
    error::AnalysisError,
    nlp::types::{AnalysisResult, ClassificationResult},
};

use super::AppState;

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorDto>)>;

fn reject(err: AnalysisError) -> (StatusCode, Json<ErrorDto>) {
    let status = match err {
        AnalysisError::Input(_) | AnalysisError::Configuration(_) => StatusCode::BAD_REQUEST,
        AnalysisError::LexiconLoad(_) | AnalysisError::Worker(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };
    warn!(%err, %status, "request failed");
    (
        status,
        Json(ErrorDto {
            error: err.to_string(),
        }),
    )
}

pub async fn health(State(state): State<AppState>) -> Json<HealthDto> {
    Json(HealthDto {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        lexicon_entries: state.pipeline.lexicon().entries().len(),
    })
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(request): Json<AnalyzeRequest>,
) -> ApiResult<AnalysisResult> {
    state
        .pipeline
        .analyze_parallel(&request.transcript)
        .await
        .map(Json)
        .map_err(reject)
}

pub async fn classify(
    State(state): State<AppState>,
    Json(request): Json<ClassifyRequest>,
) -> ApiResult<ClassificationResult> {
    state
        .pipeline
        .classify_text(&request.text)
        .map(Json)
        .map_err(reject)
}
