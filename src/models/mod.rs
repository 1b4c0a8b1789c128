use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

pub mod movie;

pub use movie::MovieRecord;

/// A recommendation result returned to the client: the matched record's
/// display metadata plus its cosine distance from the liked title.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SimilarMovie {
    pub title: String,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f32>,
    pub synopsis: Option<String>,
    pub trailer_url: Option<String>,
    pub release_year: Option<i32>,
    pub distance: f32,
}

impl SimilarMovie {
    pub fn from_record(record: &MovieRecord, distance: f32) -> Self {
        Self {
            title: record.title.clone(),
            genres: record.genres.clone(),
            poster_url: record.poster_url.clone(),
            rating: record.rating,
            synopsis: record.synopsis.clone(),
            trailer_url: record.trailer_url.clone(),
            release_year: record.release_year,
            distance,
        }
    }
}

/// Entry in the known-title listing
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TitleSummary {
    pub row: usize,
    pub title: String,
}

/// One scheduled screening from a listings source
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Screening {
    pub title: String,
    pub starts_at: NaiveTime,
}

/// A screening enriched with dataset metadata, when the title resolves
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NowPlayingEntry {
    pub title: String,
    pub starts_at: NaiveTime,
    pub genre_label: Option<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f32>,
}

impl NowPlayingEntry {
    /// Attaches display metadata to a screening. `record` is `None` when
    /// the screened title is not in the dataset; the screening is still
    /// listed, just bare.
    pub fn from_screening(screening: Screening, record: Option<&MovieRecord>) -> Self {
        Self {
            title: screening.title,
            starts_at: screening.starts_at,
            genre_label: record.map(MovieRecord::genre_label),
            poster_url: record.and_then(|r| r.poster_url.clone()),
            rating: record.and_then(|r| r.rating),
        }
    }
}

/// Counts reported after a dataset reload
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReloadSummary {
    pub records: usize,
    pub genres: usize,
}
