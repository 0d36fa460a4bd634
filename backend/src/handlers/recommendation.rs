//! Crop recommendation HTTP handlers

use axum::{extract::State, Json};

use crate::error::AppResult;
use crate::AppState;

/// Get the current crop recommendation document
pub async fn get_crop_recommendations(
    State(state): State<AppState>,
) -> AppResult<Json<serde_json::Value>> {
    let recommendations = state.recommendations.get().await?;
    Ok(Json(recommendations))
}
