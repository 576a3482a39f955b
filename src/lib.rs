//! ballondor library - Ballon d'Or shortlist scoring service
//!
//! Loads the winners and shortlist tables at startup and serves the scored
//! ranking, raw table browsing, and an embedded scoreboard UI over HTTP.

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod data;
pub mod error;
pub mod pagination;
pub mod scoring;

use data::Dataset;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Loaded dataset (immutable after startup)
    pub dataset: Arc<Dataset>,
}

impl AppState {
    /// Create new application state
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/api/prediction", get(api::get_prediction))
        .route("/api/winners", get(api::get_winner_history))
        .route("/api/table/:name", get(api::get_table_data))
        .route("/api/buildinfo", get(api::get_build_info))
        .merge(api::health_routes())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
