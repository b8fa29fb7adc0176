//! Error types and handling for the `beachday` application

use thiserror::Error;

/// Main error type for the `beachday` application
///
/// Every variant is fatal to the single request that produced it; the
/// orchestrator stops at the first error and surfaces its message verbatim.
#[derive(Error, Debug)]
pub enum BeachDayError {
    /// No ZIP codes registered for the given city/state
    #[error("No ZIP code found for {city}, {state}")]
    ZipNotFound { city: String, state: String },

    /// Geocoding call returned non-200, no results, or failed on transport
    #[error("Error fetching latitude and longitude for ZIP code {zip_code}")]
    GeoLookupFailed { zip_code: String },

    /// Weather call returned non-200; carries the upstream message if any
    #[error("Error fetching weather data: {message}")]
    WeatherFetchFailed { message: String },

    /// A 200 upstream response was missing an expected field
    #[error("Malformed upstream response: {context}")]
    MalformedResponse { context: String },

    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl BeachDayError {
    /// Create a new ZIP-not-found error
    pub fn zip_not_found<S: Into<String>>(city: S, state: S) -> Self {
        Self::ZipNotFound {
            city: city.into(),
            state: state.into(),
        }
    }

    /// Create a new geocoding failure error
    pub fn geo_lookup_failed<S: Into<String>>(zip_code: S) -> Self {
        Self::GeoLookupFailed {
            zip_code: zip_code.into(),
        }
    }

    /// Create a new weather fetch failure error
    pub fn weather_fetch_failed<S: Into<String>>(message: S) -> Self {
        Self::WeatherFetchFailed {
            message: message.into(),
        }
    }

    /// Create a new malformed-response error
    pub fn malformed<S: Into<String>>(context: S) -> Self {
        Self::MalformedResponse {
            context: context.into(),
        }
    }

    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
