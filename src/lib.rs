//! `beachday` - Beach day forecasting and rating for US cities
//!
//! This library resolves a city/state pair to a ZIP code, geocodes the ZIP
//! code to coordinates, fetches current and next-day weather, and derives a
//! human-readable report with a 0-5 star "beach day" rating and a UV danger
//! label.

pub mod api;
pub mod config;
pub mod error;
pub mod geocode;
pub mod models;
pub mod rating;
pub mod report;
pub mod weather;
pub mod web;
pub mod zipcode;

// Re-export core types for public API
pub use config::BeachDayConfig;
pub use error::BeachDayError;
pub use geocode::GeoClient;
pub use models::{Coordinates, LocationQuery, WeatherObservation};
pub use report::{BeachDayReport, BeachDayService, DayOutlook};
pub use weather::WeatherClient;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, BeachDayError>;
