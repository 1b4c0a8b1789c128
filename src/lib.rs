//! cinerec-api: genre-similarity movie recommendations over a catalog
//! snapshot.
//!
//! The core is a small content-based model: each movie's genre tags become
//! a binary feature vector over the observed genre universe, and an exact
//! cosine KNN index answers "movies similar to this one". The HTTP layer
//! loads the snapshot, resolves titles, maps rows back to display
//! metadata and exposes an explicit rebuild-and-swap operation.

pub mod config;
pub mod dataset;
pub mod engine;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
