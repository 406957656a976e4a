//! Report download endpoint

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use tracing::{error, info};

use crate::routes::ErrorResponse;
use crate::AppState;

/// Request bodies shorter than this fall back to the stored report
const MIN_REPORT_CHARS: usize = 50;

const REPORT_FILENAME: &str = "startup_investment_report.pdf";

pub fn routes() -> Router<AppState> {
    Router::new().route("/download_report", post(download_report))
}

#[derive(Debug, Deserialize)]
struct DownloadRequest {
    // older clients posted the text under "data"
    #[serde(default, alias = "data")]
    report_text: Option<String>,
}

/// Render a report as PDF
///
/// Uses the caller-supplied text when it is substantial, otherwise falls
/// back to the most recently synthesized report.
async fn download_report(
    State(state): State<AppState>,
    Json(request): Json<DownloadRequest>,
) -> impl IntoResponse {
    let body_text = request
        .report_text
        .as_deref()
        .map(str::trim)
        .filter(|text| text.chars().count() >= MIN_REPORT_CHARS)
        .map(str::to_string);

    let report_text = match body_text {
        Some(text) => text,
        None => match state.service.reports().latest_text().await {
            Some(text) => {
                info!("Falling back to the latest stored report");
                text
            }
            None => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorResponse {
                        error: "No report text supplied and no stored report available"
                            .to_string(),
                    }),
                )
                    .into_response();
            }
        },
    };

    match state.renderer.render(&report_text) {
        Ok(bytes) => {
            info!(bytes = bytes.len(), "Report PDF rendered");
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "application/pdf".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{REPORT_FILENAME}\""),
                    ),
                ],
                bytes,
            )
                .into_response()
        }
        Err(e) => {
            error!("PDF rendering failed: {}", e);
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
