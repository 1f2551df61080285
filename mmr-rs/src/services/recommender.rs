//! Recommendation assembly
//!
//! Pairs each catalog song for a mood with a quote, then records the result
//! in the history log.

use std::sync::Arc;

use mmr_common::{HistoryEntry, RecommendationItem, StateRepository};
use rand::seq::SliceRandom;
use rand::Rng;
use serde_json::Value;
use tracing::info;

use super::catalog::{songs_for_mood, CatalogSong};
use super::quotes::{fetch_quotes, QuoteProvider, FALLBACK_QUOTE};

/// Builds recommendations and appends them to the history
#[derive(Clone)]
pub struct Recommender {
    store: Arc<dyn StateRepository>,
    quotes: Arc<dyn QuoteProvider>,
}

impl Recommender {
    pub fn new(store: Arc<dyn StateRepository>, quotes: Arc<dyn QuoteProvider>) -> Self {
        Self { store, quotes }
    }

    /// Recommend songs for `mood` and record the request in the history
    ///
    /// Unknown moods yield an empty list (still recorded). Twice as many
    /// quotes as songs are requested so duplicates can be skipped.
    pub async fn recommend<R: Rng + Send>(
        &self,
        mood: &str,
        timestamp: Value,
        rng: &mut R,
    ) -> Vec<RecommendationItem> {
        let songs = songs_for_mood(mood);
        let fetched = fetch_quotes(self.quotes.as_ref(), songs.len() * 2).await;
        let items = assemble(songs, &fetched, rng);

        let mut state = self.store.load().await;
        state.history.push(HistoryEntry {
            mood: mood.to_string(),
            timestamp,
            recommendations: items.clone(),
        }
        .into());
        self.store.save(&state).await;

        info!(mood = %mood, songs = items.len(), history_len = state.history.len(), "Recommendation recorded");
        items
    }
}

/// Pick `needed` quotes: distinct ones first (first-seen order), then random
/// picks from `fetched` (duplicates allowed), then shuffle
pub fn select_quotes<R: Rng + ?Sized>(fetched: &[String], needed: usize, rng: &mut R) -> Vec<String> {
    let mut selected: Vec<String> = Vec::with_capacity(needed);
    for quote in fetched {
        if selected.len() >= needed {
            break;
        }
        if !selected.contains(quote) {
            selected.push(quote.clone());
        }
    }

    while selected.len() < needed {
        let pick = fetched
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| FALLBACK_QUOTE.to_string());
        selected.push(pick);
    }

    selected.shuffle(rng);
    selected
}

/// Zip songs (catalog order) with selected quotes, cycling through the quotes
pub fn assemble<R: Rng + ?Sized>(
    songs: &[CatalogSong],
    fetched: &[String],
    rng: &mut R,
) -> Vec<RecommendationItem> {
    let quotes = select_quotes(fetched, songs.len(), rng);
    if quotes.is_empty() {
        return Vec::new();
    }

    songs
        .iter()
        .enumerate()
        .map(|(i, song)| RecommendationItem::new(song.to_song(), quotes[i % quotes.len()].clone()))
        .collect()
}
