//! HTTP API handlers for mmr-rs

pub mod favorites;
pub mod health;
pub mod recommend;
pub mod ui;

pub use favorites::{add_favorite, delete_favorite, list_favorites};
pub use health::health_routes;
pub use recommend::{list_moods, recommend};
pub use ui::{serve_index, serve_script};
