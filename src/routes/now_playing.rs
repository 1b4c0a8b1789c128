use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    error::AppResult,
    models::NowPlayingEntry,
    services::listings::DEFAULT_COUNT,
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct NowPlayingQuery {
    pub count: Option<usize>,
}

/// Handler for the now-playing board.
///
/// Screenings come from the configured listings provider; titles that
/// resolve against the dataset are enriched with display metadata.
pub async fn now_playing(
    State(state): State<AppState>,
    Query(params): Query<NowPlayingQuery>,
) -> AppResult<Json<Vec<NowPlayingEntry>>> {
    let count = params.count.unwrap_or(DEFAULT_COUNT);
    let screenings = state.listings.now_playing(count).await?;

    let engine = Arc::clone(&*state.engine.read().await);
    let entries = screenings
        .into_iter()
        .map(|screening| {
            let record = engine
                .resolve(&screening.title)
                .ok()
                .and_then(|row| engine.record(row));
            NowPlayingEntry::from_screening(screening, record)
        })
        .collect();

    Ok(Json(entries))
}
