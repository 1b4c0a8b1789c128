use std::collections::HashMap;

use crate::models::MovieRecord;

/// Binary genre feature matrix over a dataset snapshot.
///
/// Columns are the genre universe: every distinct tag observed across the
/// records, in first-seen order. The ordering carries no meaning but is
/// stable within a build, so the same snapshot always produces the same
/// matrix. Each row is the record's one-hot encoding over that universe.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureMatrix {
    universe: Vec<String>,
    columns: HashMap<String, usize>,
    rows: Vec<Vec<f32>>,
}

impl FeatureMatrix {
    /// Builds the feature matrix from the loaded records.
    ///
    /// Records keep their input order. A record with no tags (including one
    /// whose genre string failed to parse upstream) yields an all-zero row.
    pub fn build(records: &[MovieRecord]) -> Self {
        let mut universe: Vec<String> = Vec::new();
        let mut columns: HashMap<String, usize> = HashMap::new();

        for record in records {
            for tag in &record.genres {
                if !columns.contains_key(tag) {
                    columns.insert(tag.clone(), universe.len());
                    universe.push(tag.clone());
                }
            }
        }

        let rows = records
            .iter()
            .map(|record| {
                let mut row = vec![0.0f32; universe.len()];
                for tag in &record.genres {
                    if let Some(&col) = columns.get(tag) {
                        row[col] = 1.0;
                    }
                }
                row
            })
            .collect();

        Self {
            universe,
            columns,
            rows,
        }
    }

    /// All distinct genre tags, in column order.
    pub fn universe(&self) -> &[String] {
        &self.universe
    }

    /// Column index for a genre tag, if it occurs in the dataset.
    pub fn column(&self, tag: &str) -> Option<usize> {
        self.columns.get(tag).copied()
    }

    pub fn row(&self, index: usize) -> Option<&[f32]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn rows(&self) -> &[Vec<f32>] {
        &self.rows
    }

    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn n_cols(&self) -> usize {
        self.universe.len()
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

    #[test]
    fn test_universe_is_first_seen_order() {
        let records = vec![
            record("Alpha", &["Action", "Comedy"]),
            record("Beta", &["Action"]),
            record("Gamma", &["Drama"]),
        ];
        let matrix = FeatureMatrix::build(&records);
        assert_eq!(matrix.universe(), &["Action", "Comedy", "Drama"]);
        assert_eq!(matrix.column("Drama"), Some(2));
        assert_eq!(matrix.column("Romance"), None);
    }

    #[test]
    fn test_rows_follow_input_order() {
        let records = vec![
            record("Alpha", &["Action", "Comedy"]),
            record("Beta", &["Action"]),
            record("Gamma", &["Drama"]),
        ];
        let matrix = FeatureMatrix::build(&records);
        assert_eq!(matrix.n_rows(), 3);
        assert_eq!(matrix.n_cols(), 3);
        assert_eq!(matrix.row(0).unwrap(), &[1.0, 1.0, 0.0]);
        assert_eq!(matrix.row(1).unwrap(), &[1.0, 0.0, 0.0]);
        assert_eq!(matrix.row(2).unwrap(), &[0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_identical_tag_sets_produce_identical_vectors() {
        // Same tags, different order in the source records.
        let records = vec![
            record("One", &["Action", "Comedy"]),
            record("Two", &["Comedy", "Action"]),
        ];
        let matrix = FeatureMatrix::build(&records);
        assert_eq!(matrix.row(0), matrix.row(1));
    }

    #[test]
    fn test_tagless_record_is_all_zero() {
        let records = vec![record("Alpha", &["Action"]), record("Untagged", &[])];
        let matrix = FeatureMatrix::build(&records);
        assert_eq!(matrix.row(1).unwrap(), &[0.0]);
    }

    #[test]
    fn test_empty_dataset_builds_empty_matrix() {
        let matrix = FeatureMatrix::build(&[]);
        assert_eq!(matrix.n_rows(), 0);
        assert_eq!(matrix.n_cols(), 0);
        assert!(matrix.row(0).is_none());
    }

    #[test]
    fn test_rebuild_is_deterministic() {
        let records = vec![
            record("Alpha", &["Action", "Comedy"]),
            record("Beta", &["Sci-Fi", "Action"]),
        ];
        let first = FeatureMatrix::build(&records);
        let second = FeatureMatrix::build(&records);
        assert_eq!(first, second);
    }
}
