//! mmr-rs library - Mood Music Recommendation Service
//!
//! Maps a mood to a fixed song list, decorates each song with a quote and
//! keeps a history log plus a favorites list in one JSON file.

use std::sync::Arc;

use axum::Router;
use chrono::{DateTime, Utc};
use mmr_common::StateRepository;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod error;
pub mod services;

pub use crate::error::{ApiError, ApiResult};

use services::{Favorites, QuoteProvider, Recommender};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    pub recommender: Recommender,
    pub favorites: Favorites,
    /// Service startup timestamp for uptime reporting
    pub startup_time: DateTime<Utc>,
}

impl AppState {
    /// Create new application state over one store and one quote source
    pub fn new(store: Arc<dyn StateRepository>, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self {
            recommender: Recommender::new(store.clone(), quotes),
            favorites: Favorites::new(store),
            startup_time: Utc::now(),
        }
    }
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        // Front-end
        .route("/", get(api::serve_index))
        .route("/static/js/script.js", get(api::serve_script))
        // Recommendations
        .route("/moods", get(api::list_moods))
        .route("/recommend", post(api::recommend))
        // Favorites
        .route("/favorites", get(api::list_favorites))
        .route("/add_favorite", post(api::add_favorite))
        .route("/delete_favorite", post(api::delete_favorite))
        .merge(api::health_routes())
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}
