use std::path::Path;
use std::sync::Arc;

use tokio::sync::RwLock;
use tracing_subscriber::EnvFilter;

use cinerec_api::{
    config::Config,
    dataset,
    engine::{Recommender, SharedRecommender},
    routes::{create_router, AppState},
    services::listings::{HttpListingsProvider, ListingsProvider, LocalListings},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load the snapshot and fit the model before accepting traffic.
    let records = dataset::load_records(Path::new(&config.dataset_path))?;
    let engine: SharedRecommender = Arc::new(RwLock::new(Arc::new(Recommender::build(records))));

    let listings: Arc<dyn ListingsProvider> = match &config.listings_feed_url {
        Some(url) => Arc::new(HttpListingsProvider::new(url.clone())),
        None => Arc::new(LocalListings::new(Arc::clone(&engine))),
    };
    tracing::info!(provider = listings.name(), "Listings provider selected");

    let state = AppState::new(engine, listings, config.dataset_path.clone());
    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "cinerec-api listening");
    axum::serve(listener, app).await?;

    Ok(())
}
