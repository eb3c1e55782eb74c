//! HTTP surface: movie CRUD, the producer interval report and a health check.

pub mod error;
pub mod health;
pub mod movies;
pub mod producers;

pub use error::ApiError;

use crate::analyzer::IntervalAnalyzer;
use crate::storage::MovieStore;
use axum::{Router, routing::get};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn MovieStore>,
    pub analyzer: IntervalAnalyzer,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(store: Arc<dyn MovieStore>, analyzer: IntervalAnalyzer) -> Self {
        Self {
            store,
            analyzer,
            started_at: Utc::now(),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(movies::list_movies).post(movies::create_movie))
        .route(
            "/movies/:id",
            get(movies::get_movie)
                .put(movies::update_movie)
                .delete(movies::delete_movie),
        )
        .route("/producers/winnerintervals", get(producers::winner_intervals))
        .route("/health", get(health::health_check))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
