use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{error::AppResult, models::TitleSummary};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub limit: Option<usize>,
}

/// Lists known titles, in dataset row order.
///
/// Resolution is exact-string, so clients recovering from a NotFound use
/// this listing to offer real titles instead of guessing.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListQuery>,
) -> Json<Vec<TitleSummary>> {
    let engine = Arc::clone(&*state.engine.read().await);

    let limit = params.limit.unwrap_or(usize::MAX);
    let titles = engine
        .records()
        .iter()
        .enumerate()
        .take(limit)
        .map(|(row, record)| TitleSummary {
            row,
            title: record.title.clone(),
        })
        .collect();

    Json(titles)
}

#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub title: String,
}

/// Handler exposing title resolution directly
pub async fn resolve(
    State(state): State<AppState>,
    Query(params): Query<ResolveQuery>,
) -> AppResult<Json<TitleSummary>> {
    let engine = Arc::clone(&*state.engine.read().await);
    let row = engine.resolve(&params.title)?;

    Ok(Json(TitleSummary {
        row,
        title: params.title,
    }))
}
