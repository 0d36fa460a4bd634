//! Weather data models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single point in a per-metric time series
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// Per-metric daily series for a location and date range
///
/// The three series are parallel: same dates, ascending order. Days the
/// upstream provider has no data for are absent from all three.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeatherSeries {
    pub temperature: Vec<SeriesPoint>,
    pub humidity: Vec<SeriesPoint>,
    pub rainfall: Vec<SeriesPoint>,
}

/// One day of historical weather as reported by the upstream provider
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DayWeather {
    pub avg_temp_c: f64,
    pub avg_humidity: f64,
    pub total_precip_mm: f64,
}

/// Current conditions at a location
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub place: String,
    pub country: String,
    pub conditions: String,
    pub temperature_c: f64,
    pub feels_like_c: f64,
    pub humidity_percent: f64,
    pub wind_kph: f64,
}
