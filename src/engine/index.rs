use std::sync::Arc;

use super::features::FeatureMatrix;
use super::EngineError;

/// A single query result: a dataset row and its cosine distance from the
/// query row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbor {
    pub row: usize,
    pub distance: f32,
}

/// Exact nearest-neighbor index over the genre feature matrix.
///
/// At the scale this service runs at (low thousands of rows) brute force is
/// the right answer: every query scans all rows, so results are exact and
/// ordering is reproducible. Row norms are precomputed at build time; the
/// matrix itself is shared read-only with the recommender that built it.
#[derive(Debug, Clone)]
pub struct SimilarityIndex {
    matrix: Arc<FeatureMatrix>,
    norms: Vec<f32>,
}

impl SimilarityIndex {
    /// Builds the index over all rows of the feature matrix.
    pub fn build(matrix: Arc<FeatureMatrix>) -> Self {
        let norms = matrix
            .rows()
            .iter()
            .map(|row| row.iter().map(|v| v * v).sum::<f32>().sqrt())
            .collect();
        Self { matrix, norms }
    }

    /// Returns the `k` rows nearest to `row`, ascending by cosine distance.
    ///
    /// The query row itself is excluded by identity. Ties are broken by
    /// original row order, so a fixed build always returns the same
    /// ordering. Returns fewer than `k` entries when the dataset has fewer
    /// than `k + 1` rows.
    pub fn query(&self, row: usize, k: usize) -> Result<Vec<Neighbor>, EngineError> {
        let n_rows = self.matrix.n_rows();
        let query_vector = self
            .matrix
            .row(row)
            .ok_or(EngineError::InvalidQuery { row, rows: n_rows })?;
        let query_norm = self.norms[row];

        let mut neighbors: Vec<Neighbor> = self
            .matrix
            .rows()
            .iter()
            .enumerate()
            .filter(|(other, _)| *other != row)
            .map(|(other, vector)| Neighbor {
                row: other,
                distance: cosine_distance(query_vector, query_norm, vector, self.norms[other]),
            })
            .collect();

        neighbors.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
                .then(a.row.cmp(&b.row))
        });
        neighbors.truncate(k);

        Ok(neighbors)
    }

    pub fn len(&self) -> usize {
        self.matrix.n_rows()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.n_rows() == 0
    }
}

/// Cosine distance (1 - cosine similarity) between two rows.
///
/// A zero-norm vector has no direction; its similarity to anything is
/// defined as 0, so tagless records land at distance 1 and sort last.
fn cosine_distance(a: &[f32], norm_a: f32, b: &[f32], norm_b: f32) -> f32 {
    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    let dot: f32 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    1.0 - dot / (norm_a * norm_b)
}
