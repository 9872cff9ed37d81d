//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! JSON endpoints live under `/api`. Everything else falls through to the
//! static page assets, so `/` serves `index.html` from the static dir.

pub mod dashboard;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/options", get(dashboard::options))
        .route("/api/dashboard", post(dashboard::update))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// Full application router: API routes plus the static dashboard page.
pub fn app(state: AppState, static_dir: &Path) -> Router {
    let page = ServeDir::new(static_dir).append_index_html_on_directories(true);

    api_routes(state)
        .fallback_service(page)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
