use std::path::PathBuf;
use std::sync::Arc;

use axum::{
    http::StatusCode,
    middleware,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::engine::SharedRecommender;
use crate::middleware::request_id::request_id_middleware;
use crate::services::listings::ListingsProvider;

pub mod now_playing;
pub mod recommendations;
pub mod reload;
pub mod titles;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Current engine snapshot; swapped wholesale on reload
    pub engine: SharedRecommender,
    /// Now-playing listings source
    pub listings: Arc<dyn ListingsProvider>,
    /// Dataset snapshot location, re-read on reload
    pub dataset_path: PathBuf,
}

impl AppState {
    pub fn new(
        engine: SharedRecommender,
        listings: Arc<dyn ListingsProvider>,
        dataset_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            engine,
            listings,
            dataset_path: dataset_path.into(),
        }
    }
}

/// Creates the application router with all routes
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_check))
        .nest("/api/v1", api_routes())
        .layer(middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// API routes under /api/v1
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/titles", get(titles::list))
        .route("/titles/resolve", get(titles::resolve))
        .route("/recommendations", post(recommendations::recommend))
        .route("/now-playing", get(now_playing::now_playing))
        .route("/admin/reload", post(reload::reload))
}

/// Health check endpoint
async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}
