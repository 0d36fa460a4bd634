//! Weather API client
//!
//! Integrates with WeatherAPI.com for per-day history and current
//! conditions. A day the provider has no history for is reported as
//! `Ok(None)` so the caller can apply its partial-result policy; only a
//! network-level failure (provider unreachable) becomes an error.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;

use shared::models::{CurrentConditions, DayWeather};

use crate::error::{AppError, AppResult};

/// Weather API client
#[derive(Clone)]
pub struct WeatherClient {
    client: Client,
    api_key: String,
    base_url: String,
}

/// WeatherAPI.com history response
#[derive(Debug, Deserialize)]
struct WapiHistoryResponse {
    forecast: Option<WapiForecast>,
}

#[derive(Debug, Deserialize)]
struct WapiForecast {
    forecastday: Vec<WapiForecastDay>,
}

#[derive(Debug, Deserialize)]
struct WapiForecastDay {
    day: WapiDay,
}

#[derive(Debug, Deserialize)]
struct WapiDay {
    avgtemp_c: f64,
    avghumidity: f64,
    totalprecip_mm: f64,
}

/// WeatherAPI.com current conditions response
#[derive(Debug, Deserialize)]
struct WapiCurrentResponse {
    location: WapiLocation,
    current: WapiCurrent,
}

#[derive(Debug, Deserialize)]
struct WapiLocation {
    name: String,
    country: String,
}

#[derive(Debug, Deserialize)]
struct WapiCurrent {
    temp_c: f64,
    feelslike_c: f64,
    humidity: f64,
    wind_kph: f64,
    condition: WapiCondition,
}

#[derive(Debug, Deserialize)]
struct WapiCondition {
    text: String,
}

impl WeatherClient {
    /// Create a new WeatherClient
    pub fn new(api_key: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.weatherapi.com/v1".to_string(),
        }
    }

    /// Create a new WeatherClient with custom base URL (for testing)
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetch one calendar day of historical weather for a coordinate.
    ///
    /// Returns `Ok(None)` when the provider has no data for that day (error
    /// status or a response without a forecast block).
    pub async fn history_for_day(
        &self,
        lat: f64,
        lng: f64,
        date: NaiveDate,
    ) -> AppResult<Option<DayWeather>> {
        let url = format!(
            "{}/history.json?key={}&q={},{}&dt={}",
            self.base_url, self.api_key, lat, lng, date
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("weather history: {}", e)))?;

        if !response.status().is_success() {
            tracing::debug!(%date, status = %response.status(), "no weather history for date");
            return Ok(None);
        }

        let data: WapiHistoryResponse = match response.json().await {
            Ok(data) => data,
            Err(e) => {
                tracing::warn!(%date, "unparseable weather history response: {}", e);
                return Ok(None);
            }
        };

        let day = data
            .forecast
            .and_then(|f| f.forecastday.into_iter().next())
            .map(|fd| DayWeather {
                avg_temp_c: fd.day.avgtemp_c,
                avg_humidity: fd.day.avghumidity,
                total_precip_mm: fd.day.totalprecip_mm,
            });

        Ok(day)
    }

    /// Fetch current conditions for a coordinate
    pub async fn current(&self, lat: f64, lng: f64) -> AppResult<CurrentConditions> {
        let url = format!(
            "{}/current.json?key={}&q={},{}",
            self.base_url, self.api_key, lat, lng
        );

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::UpstreamUnavailable(format!("current weather: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalService(format!(
                "weather API returned {}: {}",
                status, body
            )));
        }

        let data: WapiCurrentResponse = response
            .json()
            .await
            .map_err(|e| AppError::ExternalService(format!("invalid weather response: {}", e)))?;

        Ok(CurrentConditions {
            place: data.location.name,
            country: data.location.country,
            conditions: data.current.condition.text,
            temperature_c: data.current.temp_c,
            feels_like_c: data.current.feelslike_c,
            humidity_percent: data.current.humidity,
            wind_kph: data.current.wind_kph,
        })
    }
}
