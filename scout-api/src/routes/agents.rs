//! Single-agent analysis endpoints
//!
//! These run one analysis agent over a caller-supplied company profile,
//! without going through the full exploration pipeline.

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::post, Json, Router,
};
use tracing::{error, info};

use crate::routes::{DataRequest, ErrorResponse};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/info_perform", post(info_perform))
        .route("/competitor_compare", post(competitor_compare))
}

/// Run the performance agent over a company profile
async fn info_perform(
    State(state): State<AppState>,
    Json(request): Json<DataRequest>,
) -> impl IntoResponse {
    info!("Running performance analysis");

    match state.service.performance_agent().run(&request.data).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            error!("Performance analysis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}

/// Run the competitor agent over a company profile
async fn competitor_compare(
    State(state): State<AppState>,
    Json(request): Json<DataRequest>,
) -> impl IntoResponse {
    info!("Running competitor analysis");

    match state.service.competitor_agent().run(&request.data).await {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(e) => {
            error!("Competitor analysis failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: e.to_string(),
                }),
            )
                .into_response()
        }
    }
}
