//! Trader event scheduling HTTP handlers

use axum::{extract::State, http::StatusCode, Json};

use crate::error::AppResult;
use crate::models::{ScheduleEventInput, TraderEvent};
use crate::AppState;

/// List all scheduled events, ordered by start date
pub async fn list_events(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let events = state.events.list().await?;
    Ok(Json(serde_json::json!({ "events": events })))
}

/// Schedule a new trader event
pub async fn schedule_event(
    State(state): State<AppState>,
    Json(input): Json<ScheduleEventInput>,
) -> AppResult<(StatusCode, Json<TraderEvent>)> {
    let event = state.events.schedule(input).await?;
    Ok((StatusCode::CREATED, Json(event)))
}
