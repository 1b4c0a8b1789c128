use axum::{extract::State, Extension, Json};
use std::sync::Arc;

use crate::{
    dataset,
    engine::Recommender,
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::ReloadSummary,
};

use super::AppState;

/// Handler for the dataset reload endpoint.
///
/// Re-reads the CSV snapshot and rebuilds the feature matrix and index off
/// to the side; only a fully built engine is swapped in. Requests running
/// against the previous snapshot keep their `Arc` and finish unaffected.
pub async fn reload(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
) -> AppResult<Json<ReloadSummary>> {
    tracing::info!(
        request_id = %request_id,
        path = %state.dataset_path.display(),
        "Reloading dataset snapshot"
    );

    let path = state.dataset_path.clone();
    let rebuilt = tokio::task::spawn_blocking(move || -> AppResult<Recommender> {
        let records = dataset::load_records(&path)?;
        Ok(Recommender::build(records))
    })
    .await
    .map_err(|e| AppError::Internal(e.to_string()))??;

    let summary = ReloadSummary {
        records: rebuilt.len(),
        genres: rebuilt.genre_universe().len(),
    };

    {
        let mut slot = state.engine.write().await;
        *slot = Arc::new(rebuilt);
    }

    tracing::info!(
        request_id = %request_id,
        records = summary.records,
        genres = summary.genres,
        "Dataset snapshot swapped in"
    );

    Ok(Json(summary))
}
