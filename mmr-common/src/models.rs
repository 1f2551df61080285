//! Domain models persisted in the MMR data file
//!
//! The on-disk layout is a single JSON object:
//!
//! ```json
//! {
//!     "history": [ { "mood": "...", "timestamp": "...", "recommendations": [ ... ] } ],
//!     "favorites": [ { "url": "...", ... } ]
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

/// A song from the static mood catalog. `url` is the identity key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub title: String,
    pub artist: String,
    pub url: String,
}

/// A catalog song decorated with one quote
///
/// Serialized flat: `{title, artist, url, quote}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationItem {
    #[serde(flatten)]
    pub song: Song,
    pub quote: String,
}

impl RecommendationItem {
    pub fn new(song: Song, quote: impl Into<String>) -> Self {
        Self {
            song,
            quote: quote.into(),
        }
    }
}

/// One recommendation request and its results, as appended to the history
///
/// History is append-only and stored as raw JSON, so entries written by older
/// clients (numeric timestamps, extra keys) survive a load/save cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryEntry {
    /// Mood exactly as the client sent it
    pub mood: String,
    /// Client-supplied timestamp, stored verbatim (`null` when absent)
    pub timestamp: Value,
    pub recommendations: Vec<RecommendationItem>,
}

impl From<HistoryEntry> for Value {
    fn from(entry: HistoryEntry) -> Self {
        json!({
            "mood": entry.mood,
            "timestamp": entry.timestamp,
            "recommendations": entry.recommendations,
        })
    }
}

/// A caller-supplied favorite record
///
/// Opaque JSON except for its `url` field, which is the uniqueness key
/// within the favorites list.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Favorite(Value);

impl Favorite {
    /// Wrap a JSON value as a new favorite
    ///
    /// Returns `None` for anything other than a non-empty JSON object.
    pub fn from_value(value: Value) -> Option<Self> {
        let non_empty = value.as_object().map_or(false, |map| !map.is_empty());
        non_empty.then_some(Self(value))
    }

    /// The `url` key, if present (any JSON type)
    pub fn url(&self) -> Option<&Value> {
        self.0.get("url")
    }
}

/// Root object of the data file
///
/// Only `history` and `favorites` are interpreted. Their elements are kept
/// as stored, and unknown top-level keys are written back unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct StoreState {
    pub history: Vec<Value>,
    pub favorites: Vec<Favorite>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StoreState {
    /// Interpret a parsed data file
    ///
    /// Returns `None` when the root is not a JSON object. A missing or
    /// non-array `history`/`favorites` reads as empty.
    pub fn from_value(value: Value) -> Option<Self> {
        let Value::Object(mut map) = value else {
            return None;
        };
        let history = take_array(&mut map, "history");
        let favorites = take_array(&mut map, "favorites")
            .into_iter()
            .map(Favorite)
            .collect();
        Some(Self {
            history,
            favorites,
            extra: map,
        })
    }
}

fn take_array(map: &mut Map<String, Value>, key: &str) -> Vec<Value> {
    match map.remove(key) {
        Some(Value::Array(items)) => items,
        _ => Vec::new(),
    }
}
