use crate::{engine::Recommender, error::AppResult, models::SimilarMovie};

/// Neighbor count used when a request does not pass `k`
pub const DEFAULT_K: usize = 5;

/// Finds the movies most similar to a liked title.
///
/// Resolves the title against the engine snapshot, runs the similarity
/// query and maps the resulting rows back to display metadata. A title
/// that does not resolve surfaces as NotFound; a resolved title with no
/// similar movies returns an empty list — callers can tell the two apart.
pub fn similar_movies(
    engine: &Recommender,
    liked_title: &str,
    k: usize,
) -> AppResult<Vec<SimilarMovie>> {
    let row = engine.resolve(liked_title)?;
    let neighbors = engine.similar_to_row(row, k)?;

    tracing::debug!(
        title = %liked_title,
        row,
        requested = k,
        returned = neighbors.len(),
        "Similarity query answered"
    );

    Ok(neighbors
        .iter()
        .filter_map(|neighbor| {
            engine
                .record(neighbor.row)
                .map(|record| SimilarMovie::from_record(record, neighbor.distance))
        })
        .collect())
}
