//! Startup Scout API Server
//!
//! HTTP API server that exposes the exploration pipeline: ad-hoc questions,
//! single-agent analysis, full startup exploration and report download.

mod routes;

use axum::{
    http::{header, Method},
    Router,
};
use scout_report::PdfRenderer;
use scout_services::ExplorationService;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ExplorationService>,
    pub renderer: Arc<PdfRenderer>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env.local file
    if let Err(e) = dotenvy::from_filename(".env.local") {
        // Not an error if the file doesn't exist
        if !matches!(e, dotenvy::Error::Io(_)) {
            eprintln!("Warning: Failed to load .env.local: {}", e);
        }
    }

    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,scout_api=debug")),
        )
        .init();

    info!("Starting Startup Scout API");

    let database_path =
        std::env::var("SCOUT_DB_PATH").unwrap_or_else(|_| "data/scout.db".to_string());
    info!("Using embedding store at: {}", database_path);

    // All three external API keys and the report fonts are required at boot
    let service = Arc::new(ExplorationService::from_env(&database_path)?);
    let renderer = Arc::new(PdfRenderer::from_env()?);

    let state = AppState { service, renderer };

    // Configure CORS for frontend
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    // Build router
    let app = Router::new()
        .nest("/openai", routes::openai_routes())
        .merge(routes::health_routes())
        .layer(cors)
        .with_state(state);

    // Start server
    let port = std::env::var("SERVER_PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8000);

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Server listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
