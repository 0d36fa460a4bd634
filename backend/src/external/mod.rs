//! External API integrations

pub mod news;
pub mod weather;

pub use news::NewsClient;
pub use weather::WeatherClient;
