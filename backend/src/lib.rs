//! FieldSight Platform - Backend
//!
//! A farm analytics API: field management with polygon geometry, per-field
//! weather history, current conditions, agricultural news, soil reports, and
//! trader event scheduling.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub mod config;
pub mod error;
pub mod external;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod services;

pub use config::Config;

use external::{NewsClient, WeatherClient};
use services::{EventStore, FieldStore, RecommendationStore, WeatherService};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub fields: FieldStore,
    pub events: EventStore,
    pub recommendations: RecommendationStore,
    pub weather: WeatherService,
    pub news: NewsClient,
}

impl AppState {
    /// Build application state from configuration
    pub fn new(config: Config) -> Self {
        let data_dir = config.storage.data_dir.clone();

        let weather_client = WeatherClient::with_base_url(
            config.weather.api_key.clone(),
            config.weather.api_endpoint.clone(),
        );
        let news_client = NewsClient::with_base_url(
            config.news.api_key.clone(),
            config.news.api_endpoint.clone(),
        );

        Self {
            config: Arc::new(config),
            fields: FieldStore::new(&data_dir),
            events: EventStore::new(&data_dir),
            recommendations: RecommendationStore::new(&data_dir),
            weather: WeatherService::new(weather_client),
            news: news_client,
        }
    }
}

/// Create the application router with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(root))
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Root endpoint
async fn root() -> &'static str {
    "FieldSight Platform API v1.0"
}
