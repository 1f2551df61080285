//! Mood recommendation endpoints

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use mmr_common::RecommendationItem;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;
use serde_json::Value;

use crate::error::{ApiError, ApiResult};
use crate::services::catalog;
use crate::AppState;

#[derive(Debug, Serialize)]
pub struct RecommendResponse {
    pub songs: Vec<RecommendationItem>,
}

#[derive(Debug, Serialize)]
pub struct MoodsResponse {
    pub moods: Vec<&'static str>,
}

/// POST /recommend
///
/// Body `{mood, timestamp}`. A missing, empty or non-string `mood` is a 400.
/// The timestamp is stored exactly as sent, `null` when absent.
pub async fn recommend(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> ApiResult<Json<RecommendResponse>> {
    let body = payload.map(|Json(body)| body).unwrap_or(Value::Null);

    let mood = body
        .get("mood")
        .and_then(Value::as_str)
        .filter(|mood| !mood.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Mood not provided".to_string()))?;

    let timestamp = body.get("timestamp").cloned().unwrap_or(Value::Null);

    let mut rng = StdRng::from_entropy();
    let songs = state.recommender.recommend(mood, timestamp, &mut rng).await;

    Ok(Json(RecommendResponse { songs }))
}

/// GET /moods
pub async fn list_moods() -> Json<MoodsResponse> {
    Json(MoodsResponse {
        moods: catalog::moods().collect(),
    })
}
