//! Favorites endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use mmr_common::Favorite;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::services::{AddOutcome, RemoveOutcome};
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct FavoritesResponse {
    pub favorites: Vec<Favorite>,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    fn new(message: &str) -> Json<Self> {
        Json(Self {
            message: message.to_string(),
        })
    }
}

/// GET /favorites
pub async fn list_favorites(State(state): State<AppState>) -> Json<FavoritesResponse> {
    Json(FavoritesResponse {
        favorites: state.favorites.list().await,
    })
}

/// POST /add_favorite
///
/// Body is the favorite itself. Anything but a non-empty JSON object is a 400.
/// Adding a `url` that is already stored still answers 200.
pub async fn add_favorite(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let favorite = payload
        .ok()
        .and_then(|Json(body)| Favorite::from_value(body))
        .ok_or_else(|| ApiError::BadRequest("Favorite data not provided".to_string()))?;

    let message = match state.favorites.add(favorite).await {
        AddOutcome::Added => "Song added to favorites",
        AddOutcome::AlreadyPresent => "Song already in favorites",
    };
    Ok(MessageResponse::new(message))
}

/// POST /delete_favorite
///
/// Body `{url}`, where `url` may be any non-empty JSON value and matches by
/// equality. 404 when no favorite has that url.
pub async fn delete_favorite(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<MessageResponse>> {
    let body = payload.map(|Json(body)| body).unwrap_or(Value::Null);
    let url = body
        .get("url")
        .filter(|url| is_provided(url))
        .ok_or_else(|| ApiError::BadRequest("Song URL not provided".to_string()))?;

    match state.favorites.remove(url).await {
        RemoveOutcome::Removed(_) => Ok(MessageResponse::new("Song removed from favorites")),
        RemoveOutcome::NotFound => Err(ApiError::NotFound("Song not found in favorites".to_string())),
    }
}

/// False for `null`, `false`, `0`, `""`, `[]` and `{}`
fn is_provided(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_is_provided() {
        for value in [json!("u1"), json!(5), json!(true), json!(["u1"]), json!({"a": 1})] {
            assert!(is_provided(&value), "{} should count as provided", value);
        }
        for value in [json!(null), json!(""), json!(0), json!(0.0), json!(false), json!([]), json!({})] {
            assert!(!is_provided(&value), "{} should not count as provided", value);
        }
    }
}
