//! Field management HTTP handlers

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;
use uuid::Uuid;

use crate::error::AppResult;
use crate::models::{CreateFieldInput, Field, WeatherSeries};
use crate::AppState;

/// List all saved fields
pub async fn list_fields(State(state): State<AppState>) -> AppResult<Json<serde_json::Value>> {
    let fields = state.fields.list().await?;
    Ok(Json(serde_json::json!({ "fields": fields })))
}

/// Get a specific field
pub async fn get_field(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
) -> AppResult<Json<Field>> {
    let field = state.fields.get(field_id).await?;
    Ok(Json(field))
}

/// Register a new field
pub async fn create_field(
    State(state): State<AppState>,
    Json(input): Json<CreateFieldInput>,
) -> AppResult<(StatusCode, Json<Field>)> {
    let field = state.fields.create(input).await?;
    Ok((StatusCode::CREATED, Json(field)))
}

/// Delete a field
pub async fn delete_field(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
) -> AppResult<StatusCode> {
    state.fields.delete(field_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// Query parameters for a per-field weather range
#[derive(Debug, Deserialize)]
pub struct DateRangeQuery {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Get per-day weather series for a field, keyed by its centroid
pub async fn get_field_weather(
    State(state): State<AppState>,
    Path(field_id): Path<Uuid>,
    Query(query): Query<DateRangeQuery>,
) -> AppResult<Json<WeatherSeries>> {
    let field = state.fields.get(field_id).await?;
    let series = state
        .weather
        .fetch_range_series(field.derived.centroid, query.start_date, query.end_date)
        .await?;
    Ok(Json(series))
}
