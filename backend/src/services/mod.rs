//! Business logic services for the FieldSight platform

pub mod event;
pub mod field;
pub mod recommendation;
pub mod soil;
pub mod weather;

pub use event::EventStore;
pub use field::FieldStore;
pub use recommendation::RecommendationStore;
pub use weather::WeatherService;
