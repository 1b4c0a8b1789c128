use serde::{Deserialize, Serialize};

/// One movie from the dataset snapshot.
///
/// The title is the lookup key; the genre tags feed the recommendation
/// core. Everything else is display metadata the core never interprets —
/// it is carried through so callers can render results without a second
/// lookup.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MovieRecord {
    pub title: String,
    pub genres: Vec<String>,
    pub poster_url: Option<String>,
    pub rating: Option<f32>,
    pub synopsis: Option<String>,
    pub trailer_url: Option<String>,
    pub release_year: Option<i32>,
}

impl MovieRecord {
    /// Short genre label for display cards, capped at two tags.
    pub fn genre_label(&self) -> String {
        self.genres
            .iter()
            .take(2)
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_genre_label_caps_at_two() {
        let record = MovieRecord {
            title: "Alpha".to_string(),
            genres: vec![
                "Action".to_string(),
                "Comedy".to_string(),
                "Drama".to_string(),
            ],
            ..MovieRecord::default()
        };
        assert_eq!(record.genre_label(), "Action / Comedy");
    }

    #[test]
    fn test_genre_label_empty() {
        let record = MovieRecord::default();
        assert_eq!(record.genre_label(), "");
    }
}
