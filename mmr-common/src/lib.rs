//! # MMR Common Library
//!
//! Shared code for the Mood Music Recommender including:
//! - Domain models (songs, recommendations, history, favorites)
//! - JSON file-backed state store
//! - Configuration loading
//! - Common error types

pub mod config;
pub mod error;
pub mod models;
pub mod store;

pub use error::{Error, Result};
pub use models::{Favorite, HistoryEntry, RecommendationItem, Song, StoreState};
pub use store::{JsonFileStore, StateRepository};
