//! Data models for location queries, coordinates, and weather observations
//!
//! Every value here is owned by the request that created it: nothing is
//! cached or shared across requests, and observations are never mutated
//! after construction.

use serde::{Deserialize, Serialize};

/// Normalized city/state pair used as the lookup key for the ZIP dataset
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct LocationQuery {
    /// City name, title-cased
    pub city: String,
    /// Two-letter state code, upper-cased (passed through otherwise)
    pub state: String,
}

impl LocationQuery {
    /// Build a query from raw user input, trimming and normalizing case
    pub fn new(city: &str, state: &str) -> Self {
        Self {
            city: title_case(city.trim()),
            state: state.trim().to_uppercase(),
        }
    }
}

/// Location coordinates resolved from a ZIP code
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinates {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

/// A single weather observation, either current conditions or a day's forecast
///
/// All values are imperial: degrees Fahrenheit, miles per hour, and percent.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherObservation {
    /// Human-readable sky description
    pub description: String,
    /// Temperature in degrees Fahrenheit
    pub temperature: f64,
    /// Feels-like temperature in degrees Fahrenheit
    pub feels_like: f64,
    /// Relative humidity percentage (0-100)
    pub humidity: f64,
    /// Wind speed in miles per hour
    pub wind_speed: f64,
    /// UV index
    pub uv_index: f64,
    /// Precipitation probability percentage (0-100)
    pub precipitation_probability: f64,
}

/// Title-case a string: upper-case every alphabetic character that follows a
/// non-alphabetic one, lower-case the rest ("old town" -> "Old Town",
/// "winston-salem" -> "Winston-Salem")
fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_boundary = true;
    for ch in input.chars() {
        if ch.is_alphabetic() {
            if at_boundary {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_boundary = false;
        } else {
            out.push(ch);
            at_boundary = true;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_normalization() {
        let query = LocationQuery::new(" miami ", "fl");
        assert_eq!(query.city, "Miami");
        assert_eq!(query.state, "FL");
    }

    #[test]
    fn test_title_case_multi_word() {
        assert_eq!(title_case("long beach"), "Long Beach");
        assert_eq!(title_case("OLD TOWN"), "Old Town");
        assert_eq!(title_case("winston-salem"), "Winston-Salem");
    }

    #[test]
    fn test_title_case_empty() {
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_observation_serialization_roundtrip() {
        let obs = WeatherObservation {
            description: "clear sky".to_string(),
            temperature: 82.0,
            feels_like: 84.0,
            humidity: 40.0,
            wind_speed: 5.0,
            uv_index: 4.0,
            precipitation_probability: 10.0,
        };

        let json = serde_json::to_string(&obs).expect("serialize observation");
        let back: WeatherObservation = serde_json::from_str(&json).expect("deserialize observation");
        assert_eq!(back, obs);
    }
}
