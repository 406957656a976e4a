//! Full startup exploration endpoint

use axum::{
    extract::State, http::StatusCode, response::IntoResponse, routing::get, Json, Router,
};
use tracing::{error, info};

use crate::routes::ErrorResponse;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/explore_startup", get(explore_startup))
}

/// Discover a new startup and run the full analysis pipeline over it
///
/// Returns the per-agent summaries in pipeline order with the synthesized
/// report appended as the final element.
async fn explore_startup(State(state): State<AppState>) -> impl IntoResponse {
    info!("Starting startup exploration");

    match state.service.explore_startup().await {
        Ok(run) => {
            info!(company = %run.company, "Exploration finished");
            (StatusCode::OK, Json(run.sections)).into_response()
        }
        Err(e) => {
            error!("Exploration failed: {}", e);
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
