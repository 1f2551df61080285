//! Favorites list operations over the state store
//!
//! `url` is the uniqueness key. Each operation is a full load/modify/save
//! cycle against the store.

use std::sync::Arc;

use mmr_common::{Favorite, StateRepository};
use serde_json::Value;
use tracing::info;

/// Result of [`Favorites::add`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
}

/// Result of [`Favorites::remove`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Number of entries removed (at most one when `add` was the only writer)
    Removed(usize),
    NotFound,
}

#[derive(Clone)]
pub struct Favorites {
    store: Arc<dyn StateRepository>,
}

impl Favorites {
    pub fn new(store: Arc<dyn StateRepository>) -> Self {
        Self { store }
    }

    /// All favorites in insertion order
    pub async fn list(&self) -> Vec<Favorite> {
        self.store.load().await.favorites
    }

    /// Append `favorite` unless one with the same `url` exists
    ///
    /// Favorites without a `url` compare equal to each other, so only the
    /// first of them is kept.
    pub async fn add(&self, favorite: Favorite) -> AddOutcome {
        let mut state = self.store.load().await;
        if state.favorites.iter().any(|f| f.url() == favorite.url()) {
            return AddOutcome::AlreadyPresent;
        }

        state.favorites.push(favorite);
        self.store.save(&state).await;
        info!(favorites = state.favorites.len(), "Favorite added");
        AddOutcome::Added
    }

    /// Remove every favorite whose `url` equals `url` (JSON equality)
    ///
    /// The store is only written when something was removed.
    pub async fn remove(&self, url: &Value) -> RemoveOutcome {
        let mut state = self.store.load().await;
        let before = state.favorites.len();
        state.favorites.retain(|f| f.url() != Some(url));

        let removed = before - state.favorites.len();
        if removed == 0 {
            return RemoveOutcome::NotFound;
        }

        self.store.save(&state).await;
        info!(url = %url, removed, "Favorite removed");
        RemoveOutcome::Removed(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mmr_common::{JsonFileStore, StoreState};
    use serde_json::json;
    use tempfile::TempDir;

    fn fav(value: serde_json::Value) -> Favorite {
        Favorite::from_value(value).unwrap()
    }

    fn favorites(dir: &TempDir) -> (Favorites, Arc<JsonFileStore>) {
        let store = Arc::new(JsonFileStore::new(dir.path().join("favorites.json")));
        (Favorites::new(store.clone()), store)
    }

    #[tokio::test]
    async fn test_add_same_url_twice_keeps_one() {
        let dir = TempDir::new().unwrap();
        let (favs, _) = favorites(&dir);

        assert_eq!(favs.add(fav(json!({"url": "u1", "title": "A"}))).await, AddOutcome::Added);
        assert_eq!(
            favs.add(fav(json!({"url": "u1", "title": "A"}))).await,
            AddOutcome::AlreadyPresent
        );

        assert_eq!(favs.list().await.len(), 1);
    }

    #[tokio::test]
    async fn test_add_same_url_different_fields_keeps_first() {
        let dir = TempDir::new().unwrap();
        let (favs, _) = favorites(&dir);

        favs.add(fav(json!({"url": "u1", "title": "First"}))).await;
        favs.add(fav(json!({"url": "u1", "title": "Second"}))).await;

        let list = favs.list().await;
        assert_eq!(list.len(), 1);
        assert_eq!(serde_json::to_value(&list[0]).unwrap()["title"], "First");
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let dir = TempDir::new().unwrap();
        let (favs, _) = favorites(&dir);

        for url in ["u3", "u1", "u2"] {
            favs.add(fav(json!({ "url": url }))).await;
        }

        let urls: Vec<_> = favs
            .list()
            .await
            .iter()
            .map(|f| f.url().and_then(|u| u.as_str()).unwrap().to_string())
            .collect();
        assert_eq!(urls, vec!["u3", "u1", "u2"]);
    }

    #[tokio::test]
    async fn test_favorites_without_url_collapse() {
        let dir = TempDir::new().unwrap();
        let (favs, _) = favorites(&dir);

        assert_eq!(favs.add(fav(json!({"title": "A"}))).await, AddOutcome::Added);
        assert_eq!(favs.add(fav(json!({"title": "B"}))).await, AddOutcome::AlreadyPresent);
    }

    #[tokio::test]
    async fn test_remove_missing_url_reports_not_found_and_does_not_write() {
        let dir = TempDir::new().unwrap();
        let (favs, store) = favorites(&dir);

        assert_eq!(favs.remove(&json!("missing")).await, RemoveOutcome::NotFound);
        assert!(!store.path().exists());
        assert_eq!(store.load().await, StoreState::default());
    }

    #[tokio::test]
    async fn test_remove_leaves_other_favorites() {
        let dir = TempDir::new().unwrap();
        let (favs, _) = favorites(&dir);
        favs.add(fav(json!({"url": "u1"}))).await;
        favs.add(fav(json!({"url": "u2"}))).await;

        assert_eq!(favs.remove(&json!("u1")).await, RemoveOutcome::Removed(1));
        assert_eq!(favs.remove(&json!("u1")).await, RemoveOutcome::NotFound);

        let list = favs.list().await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].url(), Some(&json!("u2")));
    }

    #[tokio::test]
    async fn test_remove_clears_duplicates_from_hand_edited_file() {
        let dir = TempDir::new().unwrap();
        let (favs, store) = favorites(&dir);
        let state = StoreState {
            history: vec![],
            favorites: vec![fav(json!({"url": "dup"})), fav(json!({"url": "dup"}))],
            extra: Default::default(),
        };
        store.save(&state).await;

        assert_eq!(favs.remove(&json!("dup")).await, RemoveOutcome::Removed(2));
        assert!(favs.list().await.is_empty());
    }

    #[tokio::test]
    async fn test_operations_keep_history_intact() {
        let dir = TempDir::new().unwrap();
        let (favs, store) = favorites(&dir);
        let mut state = StoreState::default();
        state.history.push(json!({"mood": "happy", "timestamp": 1700000000}));
        store.save(&state).await;

        favs.add(fav(json!({"url": "u1"}))).await;
        favs.remove(&json!("u1")).await;

        assert_eq!(store.load().await.history, state.history);
    }

    #[tokio::test]
    async fn test_remove_matches_non_string_url() {
        let dir = TempDir::new().unwrap();
        let (favs, _) = favorites(&dir);
        favs.add(fav(json!({"url": 5, "title": "Numbered"}))).await;
        favs.add(fav(json!({"url": "5"}))).await;

        assert_eq!(favs.remove(&json!(5)).await, RemoveOutcome::Removed(1));

        let list = favs.list().await;
        assert_eq!(list.len(), 1);
        assert_eq!(list[0].url(), Some(&json!("5")));
    }
}
