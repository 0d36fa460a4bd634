//! Route definitions for the FieldSight API

use axum::{routing::get, Router};

use crate::{handlers, AppState};

/// Create API routes
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(handlers::health_check))
        // Field management
        .nest("/fields", field_routes())
        // Weather lookups
        .nest("/weather", weather_routes())
        // Agricultural news proxy
        .route("/news", get(handlers::get_news))
        // Trader event scheduling
        .nest("/trader", trader_routes())
        // Soil reports
        .route("/soil/:field_id", get(handlers::get_soil_report))
        // Crop recommendations
        .route("/crops/recommendations", get(handlers::get_crop_recommendations))
}

/// Field management routes
fn field_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::list_fields).post(handlers::create_field))
        .route(
            "/:field_id",
            get(handlers::get_field).delete(handlers::delete_field),
        )
        .route("/:field_id/weather", get(handlers::get_field_weather))
}

/// Weather routes
fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/range", get(handlers::get_weather_range))
        .route("/current", get(handlers::get_current_weather))
}

/// Trader routes
fn trader_routes() -> Router<AppState> {
    Router::new().route(
        "/events",
        get(handlers::list_events).post(handlers::schedule_event),
    )
}
