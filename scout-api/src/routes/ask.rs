//! Ad-hoc question endpoint with token streaming

use std::convert::Infallible;

use axum::{
    extract::State,
    http::StatusCode,
    response::sse::{Event, Sse},
    response::IntoResponse,
    routing::post,
    Json, Router,
};
use futures::stream::{self, StreamExt};
use tracing::{error, info};

use crate::routes::{DataRequest, ErrorResponse};
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/ask", post(ask))
}

/// Answer a free-form question, streaming tokens as SSE events and
/// closing with a `[DONE]` marker
async fn ask(
    State(state): State<AppState>,
    Json(request): Json<DataRequest>,
) -> impl IntoResponse {
    info!("Streaming answer for ad-hoc question");

    match state.service.chat().complete_stream(&request.data).await {
        Ok(tokens) => {
            let events = tokens
                .map(|item| match item {
                    Ok(token) => Event::default().data(token),
                    Err(e) => {
                        error!("Token stream failed: {}", e);
                        Event::default().data(format!("[ERROR] {e}"))
                    }
                })
                .chain(stream::once(async { Event::default().data("[DONE]") }))
                .map(Ok::<_, Infallible>);

            Sse::new(events).into_response()
        }
        Err(e) => {
            error!("Failed to open completion stream: {}", e);
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
