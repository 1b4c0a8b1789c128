//! The recommendation core: genre feature building, cosine KNN, and title
//! resolution. Everything in here is synchronous and read-only once built;
//! callers rebuild and swap the whole [`Recommender`] when the dataset
//! changes.

pub mod features;
pub mod index;
pub mod tags;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Instant;

use thiserror::Error;

use crate::models::MovieRecord;
use features::FeatureMatrix;
use index::{Neighbor, SimilarityIndex};

/// Shared slot holding the current engine snapshot.
///
/// Queries clone the inner `Arc` and run against an immutable snapshot;
/// a reload builds a fresh [`Recommender`] off to the side and swaps the
/// `Arc` as a unit, so readers never observe a partial rebuild.
pub type SharedRecommender = Arc<tokio::sync::RwLock<Arc<Recommender>>>;

/// Error types for the recommendation core
#[derive(Debug, Error)]
pub enum EngineError {
    /// No record has this exact title. Recoverable: callers prompt for a
    /// known title instead.
    #[error("no movie titled {0:?} in the dataset")]
    TitleNotFound(String),

    /// A row index outside the matrix was queried. This is a caller bug
    /// (typically a stale index held across a rebuild), not a user error.
    #[error("row {row} is out of bounds for a {rows}-row index")]
    InvalidQuery { row: usize, rows: usize },
}

/// A fitted recommendation model over one dataset snapshot.
///
/// Owns the records, the genre feature matrix and the similarity index as a
/// unit. Built once per snapshot and never mutated; reloading the dataset
/// produces a fresh `Recommender` that replaces the old one wholesale.
#[derive(Debug, Clone)]
pub struct Recommender {
    records: Vec<MovieRecord>,
    features: Arc<FeatureMatrix>,
    index: SimilarityIndex,
    title_rows: HashMap<String, usize>,
}

impl Recommender {
    /// Fits the feature matrix and similarity index over the records.
    ///
    /// Duplicate titles keep their first row in the resolve table; later
    /// occurrences stay indexed but are only reachable by row.
    pub fn build(records: Vec<MovieRecord>) -> Self {
        let started = Instant::now();

        let mut title_rows: HashMap<String, usize> = HashMap::with_capacity(records.len());
        for (row, record) in records.iter().enumerate() {
            if title_rows.contains_key(&record.title) {
                tracing::warn!(title = %record.title, row, "Duplicate title, keeping first row");
            } else {
                title_rows.insert(record.title.clone(), row);
            }
        }

        let features = Arc::new(FeatureMatrix::build(&records));
        let index = SimilarityIndex::build(Arc::clone(&features));

        tracing::info!(
            records = records.len(),
            genres = features.n_cols(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Recommender built"
        );

        Self {
            records,
            features,
            index,
            title_rows,
        }
    }

    /// Resolves a title to its dataset row.
    ///
    /// Matching is exact-string and case-sensitive on purpose: a mistyped
    /// title is unresolved, never guessed at.
    pub fn resolve(&self, title: &str) -> Result<usize, EngineError> {
        self.title_rows
            .get(title)
            .copied()
            .ok_or_else(|| EngineError::TitleNotFound(title.to_string()))
    }

    /// The `k` rows most similar to `row`, nearest first.
    pub fn similar_to_row(&self, row: usize, k: usize) -> Result<Vec<Neighbor>, EngineError> {
        self.index.query(row, k)
    }

    /// Convenience for callers holding a title: resolve then query.
    pub fn similar_to_title(&self, title: &str, k: usize) -> Result<Vec<Neighbor>, EngineError> {
        let row = self.resolve(title)?;
        self.similar_to_row(row, k)
    }

    pub fn record(&self, row: usize) -> Option<&MovieRecord> {
        self.records.get(row)
    }

    pub fn records(&self) -> &[MovieRecord] {
        &self.records
    }

    pub fn genre_universe(&self) -> &[String] {
        self.features.universe()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ..MovieRecord::default()
        }
    }

    fn abg_recommender() -> Recommender {
        Recommender::build(vec![
            record("Alpha", &["Action", "Comedy"]),
            record("Beta", &["Action"]),
            record("Gamma", &["Drama"]),
        ])
    }

    #[test]
    fn test_resolve_round_trips() {
        let engine = abg_recommender();
        let row = engine.resolve("Beta").unwrap();
        assert_eq!(row, 1);
        assert_eq!(engine.record(row).unwrap().title, "Beta");
    }

    #[test]
    fn test_resolve_is_case_sensitive() {
        let engine = abg_recommender();
        assert!(matches!(
            engine.resolve("beta"),
            Err(EngineError::TitleNotFound(_))
        ));
    }

    #[test]
    fn test_resolve_unknown_title() {
        let engine = abg_recommender();
        let err = engine.resolve("Delta").unwrap_err();
        assert!(err.to_string().contains("Delta"));
    }

    #[test]
    fn test_similar_to_title_scenario() {
        let engine = abg_recommender();
        let neighbors = engine.similar_to_title("Beta", 1).unwrap();
        assert_eq!(neighbors.len(), 1);
        // Alpha shares "Action" with Beta; Gamma shares nothing.
        assert_eq!(engine.record(neighbors[0].row).unwrap().title, "Alpha");
    }

    #[test]
    fn test_duplicate_titles_resolve_to_first_row() {
        let engine = Recommender::build(vec![
            record("Twin", &["Action"]),
            record("Twin", &["Drama"]),
        ]);
        assert_eq!(engine.resolve("Twin").unwrap(), 0);
        assert_eq!(engine.len(), 2);
    }

    #[test]
    fn test_empty_dataset_builds_and_rejects_queries() {
        let engine = Recommender::build(Vec::new());
        assert!(engine.is_empty());
        assert!(matches!(
            engine.resolve("Anything"),
            Err(EngineError::TitleNotFound(_))
        ));
        assert!(matches!(
            engine.similar_to_row(0, 5),
            Err(EngineError::InvalidQuery { .. })
        ));
    }

    #[test]
    fn test_genre_universe_exposed() {
        let engine = abg_recommender();
        assert_eq!(engine.genre_universe(), &["Action", "Comedy", "Drama"]);
    }
}
