//! Weather aggregation over a field's centroid
//!
//! Turns a coordinate and an inclusive date range into three parallel daily
//! series (temperature, humidity, rainfall). Per-day fetches run
//! concurrently and may complete in any order, so assembly re-sorts by date
//! before returning.
//!
//! Partial-result policy: a day the provider has no data for is dropped from
//! all three series rather than failing the request. Only a network-level
//! failure (provider unreachable) aborts with `UpstreamUnavailable`.

use chrono::{Days, NaiveDate};
use futures::future::join_all;

use shared::models::{CurrentConditions, DayWeather, SeriesPoint, WeatherSeries};
use shared::types::GeoPoint;
use shared::validation::validate_date_range;

use crate::error::{AppError, AppResult};
use crate::external::WeatherClient;

/// Weather aggregation service
#[derive(Clone)]
pub struct WeatherService {
    client: WeatherClient,
}

impl WeatherService {
    /// Create a new WeatherService around an API client
    pub fn new(client: WeatherClient) -> Self {
        Self { client }
    }

    /// Fetch per-day weather series for a coordinate and inclusive date range
    pub async fn fetch_range_series(
        &self,
        centroid: GeoPoint,
        start: NaiveDate,
        end: NaiveDate,
    ) -> AppResult<WeatherSeries> {
        if !centroid.in_bounds() {
            return Err(AppError::InvalidCoordinate(format!(
                "({}, {}) is outside valid latitude/longitude bounds",
                centroid.lat, centroid.lng
            )));
        }
        validate_date_range(start, end)
            .map_err(|msg| AppError::InvalidDateRange(msg.to_string()))?;

        let dates = enumerate_dates(start, end);
        let fetches = dates.iter().map(|&date| {
            let client = self.client.clone();
            async move {
                let day = client.history_for_day(centroid.lat, centroid.lng, date).await?;
                Ok::<_, AppError>((date, day))
            }
        });

        let mut days = Vec::with_capacity(dates.len());
        for result in join_all(fetches).await {
            let (date, day) = result?;
            match day {
                Some(day) => days.push((date, day)),
                None => tracing::debug!(%date, "dropping day with no upstream data"),
            }
        }

        Ok(assemble_series(days))
    }

    /// Fetch current conditions for a coordinate
    pub async fn current(&self, point: GeoPoint) -> AppResult<CurrentConditions> {
        if !point.in_bounds() {
            return Err(AppError::InvalidCoordinate(format!(
                "({}, {}) is outside valid latitude/longitude bounds",
                point.lat, point.lng
            )));
        }
        self.client.current(point.lat, point.lng).await
    }
}

/// Enumerate every calendar date in `[start, end]` inclusive, ascending
pub fn enumerate_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = start;
    while current <= end {
        dates.push(current);
        match current.checked_add_days(Days::new(1)) {
            Some(next) => current = next,
            None => break,
        }
    }
    dates
}

/// Assemble per-day results into parallel per-metric series, sorted by date.
///
/// Concurrent fetches complete out of order; sorting here restores
/// determinism for consumers.
pub fn assemble_series(mut days: Vec<(NaiveDate, DayWeather)>) -> WeatherSeries {
    days.sort_by_key(|(date, _)| *date);

    let mut series = WeatherSeries::default();
    for (date, day) in days {
        series.temperature.push(SeriesPoint {
            date,
            value: day.avg_temp_c,
        });
        series.humidity.push(SeriesPoint {
            date,
            value: day.avg_humidity,
        });
        series.rainfall.push(SeriesPoint {
            date,
            value: day.total_precip_mm,
        });
    }
    series
}
