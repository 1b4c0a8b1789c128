//! Dataset snapshot loading.
//!
//! The dataset is a CSV export of the movie catalog, one row per movie.
//! Loading is deliberately tolerant: a row that cannot be deserialized or
//! whose genre field cannot be parsed degrades (skip, or keep with empty
//! tags) instead of failing the whole snapshot.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use crate::engine::tags::parse_genre_tags;
use crate::error::AppResult;
use crate::models::MovieRecord;

/// One CSV row as exported upstream. Genres arrive as a serialized list
/// string; everything except the title may be missing.
#[derive(Debug, Deserialize)]
struct RawMovieRow {
    title: String,
    genres: String,
    #[serde(default)]
    poster_url: Option<String>,
    #[serde(default)]
    rating: Option<f32>,
    #[serde(default)]
    synopsis: Option<String>,
    #[serde(default)]
    trailer_url: Option<String>,
    #[serde(default)]
    release_year: Option<i32>,
}

/// Loads movie records from a CSV snapshot on disk.
pub fn load_records(path: &Path) -> AppResult<Vec<MovieRecord>> {
    let reader = csv::Reader::from_path(path)?;
    let records = read_records(reader)?;
    tracing::info!(
        path = %path.display(),
        records = records.len(),
        "Dataset snapshot loaded"
    );
    Ok(records)
}

/// Reads records from any CSV source. Row-level failures are logged and
/// skipped; only a failure to read the source at all is an error.
pub fn read_records<R: Read>(mut reader: csv::Reader<R>) -> AppResult<Vec<MovieRecord>> {
    let mut records = Vec::new();

    for (row, result) in reader.deserialize::<RawMovieRow>().enumerate() {
        let raw = match result {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(row, error = %err, "Skipping undeserializable dataset row");
                continue;
            }
        };

        let title = raw.title.trim().to_string();
        if title.is_empty() {
            tracing::warn!(row, "Skipping dataset row without a title");
            continue;
        }

        let genres = match parse_genre_tags(&raw.genres) {
            Ok(tags) => tags,
            Err(err) => {
                tracing::warn!(row, title = %title, error = %err, "Malformed genre list, keeping record with no tags");
                Vec::new()
            }
        };

        records.push(MovieRecord {
            title,
            genres,
            poster_url: raw.poster_url.filter(|s| !s.trim().is_empty()),
            rating: raw.rating,
            synopsis: raw.synopsis.filter(|s| !s.trim().is_empty()),
            trailer_url: raw.trailer_url.filter(|s| !s.trim().is_empty()),
            release_year: raw.release_year,
        });
    }

    Ok(records)
}
