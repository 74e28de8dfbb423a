// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{landing_page, not_found, progress_svg};
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/progress.svg", get(progress_svg))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
