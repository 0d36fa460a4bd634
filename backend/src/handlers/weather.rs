//! HTTP handlers for weather endpoints

use axum::{
    extract::{Query, State},
    Json,
};
use chrono::NaiveDate;
use serde::Deserialize;

use shared::types::GeoPoint;

use crate::error::AppResult;
use crate::models::{CurrentConditions, WeatherSeries};
use crate::AppState;

/// Query parameters for a weather range lookup by coordinate
#[derive(Debug, Deserialize)]
pub struct RangeQuery {
    pub lat: f64,
    pub lng: f64,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Get per-day weather series for an explicit coordinate
pub async fn get_weather_range(
    State(state): State<AppState>,
    Query(query): Query<RangeQuery>,
) -> AppResult<Json<WeatherSeries>> {
    let series = state
        .weather
        .fetch_range_series(
            GeoPoint::new(query.lat, query.lng),
            query.start_date,
            query.end_date,
        )
        .await?;
    Ok(Json(series))
}

/// Query parameters for a current-conditions lookup
#[derive(Debug, Deserialize)]
pub struct LocationQuery {
    pub lat: f64,
    pub lng: f64,
}

/// Get current conditions for a coordinate
pub async fn get_current_weather(
    State(state): State<AppState>,
    Query(query): Query<LocationQuery>,
) -> AppResult<Json<CurrentConditions>> {
    let conditions = state
        .weather
        .current(GeoPoint::new(query.lat, query.lng))
        .await?;
    Ok(Json(conditions))
}
