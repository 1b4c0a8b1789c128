use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveTime;
use rand::seq::SliceRandom;
use reqwest::Client as HttpClient;

use crate::{
    engine::SharedRecommender,
    error::{AppError, AppResult},
    models::Screening,
};

/// Default number of screenings on the now-playing board
pub const DEFAULT_COUNT: usize = 4;

/// Fixed screening slots used when sampling locally
const SHOWTIME_SLOTS: [(u32, u32); 4] = [(18, 0), (20, 30), (21, 0), (22, 15)];

/// Source of now-playing listings.
///
/// The recommendation core never fetches anything over the network; what is
/// currently screening is supplementary content behind this trait so the
/// feed can be swapped (or mocked) without touching the rest of the app.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ListingsProvider: Send + Sync {
    /// Returns up to `count` screenings, soonest first.
    async fn now_playing(&self, count: usize) -> AppResult<Vec<Screening>>;

    /// Provider name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Listings fetched from an external showtimes feed.
///
/// The feed returns a JSON array of `{"title", "starts_at"}` objects.
#[derive(Clone)]
pub struct HttpListingsProvider {
    http_client: HttpClient,
    feed_url: String,
}

impl HttpListingsProvider {
    pub fn new(feed_url: String) -> Self {
        Self {
            http_client: HttpClient::new(),
            feed_url,
        }
    }
}

#[async_trait]
impl ListingsProvider for HttpListingsProvider {
    async fn now_playing(&self, count: usize) -> AppResult<Vec<Screening>> {
        let response = self
            .http_client
            .get(&self.feed_url)
            .query(&[("count", count)])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, body = %body, "Listings feed request failed");
            return Err(AppError::ExternalApi(format!(
                "Listings feed returned status {}: {}",
                status, body
            )));
        }

        let screenings: Vec<Screening> = response.json().await?;
        tracing::debug!(fetched = screenings.len(), "Listings feed answered");

        Ok(screenings.into_iter().take(count).collect())
    }

    fn name(&self) -> &'static str {
        "http-feed"
    }
}

/// Fallback listings sampled from the loaded dataset.
///
/// Without a configured feed, the board shows a random pick of catalog
/// movies on the fixed screening slots. Reads the current engine snapshot,
/// so a reload is reflected on the next request.
pub struct LocalListings {
    engine: SharedRecommender,
}

impl LocalListings {
    pub fn new(engine: SharedRecommender) -> Self {
        Self { engine }
    }
}

#[async_trait]
impl ListingsProvider for LocalListings {
    async fn now_playing(&self, count: usize) -> AppResult<Vec<Screening>> {
        let snapshot = Arc::clone(&*self.engine.read().await);

        let mut rng = rand::thread_rng();
        let picks = snapshot.records().choose_multiple(&mut rng, count);

        let screenings = picks
            .zip(SHOWTIME_SLOTS.iter().cycle())
            .filter_map(|(record, &(hour, minute))| {
                NaiveTime::from_hms_opt(hour, minute, 0).map(|starts_at| Screening {
                    title: record.title.clone(),
                    starts_at,
                })
            })
            .collect();

        Ok(screenings)
    }

    fn name(&self) -> &'static str {
        "local-sample"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Recommender;
    use crate::models::MovieRecord;
    use tokio::sync::RwLock;

    fn record(title: &str, genres: &[&str]) -> MovieRecord {
        MovieRecord {
            title: title.to_string(),
            genres: genres.iter().map(|g| g.to_string()).collect(),
            ..MovieRecord::default()
        }
    }

    fn shared_engine(records: Vec<MovieRecord>) -> SharedRecommender {
        Arc::new(RwLock::new(Arc::new(Recommender::build(records))))
    }

    #[tokio::test]
    async fn test_local_listings_sample_count() {
        let engine = shared_engine(vec![
            record("Alpha", &["Action"]),
            record("Beta", &["Drama"]),
            record("Gamma", &["Comedy"]),
            record("Delta", &["Horror"]),
            record("Epsilon", &["Sci-Fi"]),
        ]);
        let provider = LocalListings::new(engine);

        let screenings = provider.now_playing(4).await.unwrap();
        assert_eq!(screenings.len(), 4);

        // Sampled titles all come from the dataset, without repeats.
        let mut titles: Vec<&str> = screenings.iter().map(|s| s.title.as_str()).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), 4);
    }

    #[tokio::test]
    async fn test_local_listings_small_dataset() {
        let engine = shared_engine(vec![record("Only", &["Action"])]);
        let provider = LocalListings::new(engine);

        let screenings = provider.now_playing(4).await.unwrap();
        assert_eq!(screenings.len(), 1);
        assert_eq!(screenings[0].title, "Only");
    }

    #[tokio::test]
    async fn test_local_listings_empty_dataset() {
        let engine = shared_engine(Vec::new());
        let provider = LocalListings::new(engine);
        assert!(provider.now_playing(4).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_mock_provider_contract() {
        let mut provider = MockListingsProvider::new();
        provider.expect_now_playing().returning(|count| {
            Ok((0..count)
                .map(|i| Screening {
                    title: format!("Movie {i}"),
                    starts_at: NaiveTime::from_hms_opt(18, 0, 0).unwrap(),
                })
                .collect())
        });

        let screenings = provider.now_playing(2).await.unwrap();
        assert_eq!(screenings.len(), 2);
        assert_eq!(screenings[0].title, "Movie 0");
    }
}
