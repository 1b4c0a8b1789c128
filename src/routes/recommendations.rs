use axum::{extract::State, Extension, Json};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    models::SimilarMovie,
    services::recommendations::{similar_movies, DEFAULT_K},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    /// Exact title of a movie the user liked
    pub liked_title: String,
    /// Neighbor count; defaults to 5
    pub k: Option<usize>,
}

/// Handler for recommendations endpoint
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<Vec<SimilarMovie>>> {
    let k = request.k.unwrap_or(DEFAULT_K);

    tracing::info!(
        request_id = %request_id,
        liked_title = %request.liked_title,
        k,
        "Processing recommendation request"
    );

    let engine = Arc::clone(&*state.engine.read().await);
    let results = similar_movies(&engine, &request.liked_title, k)?;

    tracing::info!(
        request_id = %request_id,
        returned = results.len(),
        "Recommendation request completed"
    );

    Ok(Json(results))
}
