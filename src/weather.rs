//! Weather client for a One Call-style weather API
//!
//! Fetches current conditions plus the daily forecast array in one request
//! (imperial units, minutely/hourly granularity excluded) and extracts the
//! "today" and "tomorrow" observations. Today's observation comes from the
//! `current` block, which is richer than `daily[0]`, except for the
//! precipitation probability that only the daily array carries. Tomorrow is
//! `daily[1]`.
//!
//! Any expected field missing from a 200 response is fatal for the request
//! and reported as [`BeachDayError::MalformedResponse`]; nothing is
//! defaulted.

use crate::config::WeatherConfig;
use crate::models::{Coordinates, WeatherObservation};
use crate::{BeachDayError, Result};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the one-call weather API
#[derive(Debug, Clone)]
pub struct WeatherClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl WeatherClient {
    /// Create a new weather client from configuration
    pub fn new(config: &WeatherConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds.into()))
            .user_agent(concat!("beachday/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| BeachDayError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            api_key: config.api_key.clone(),
        })
    }

    /// Fetch the (today, tomorrow) observation pair for the given coordinates
    pub async fn fetch(
        &self,
        coordinates: &Coordinates,
    ) -> Result<(WeatherObservation, WeatherObservation)> {
        debug!(
            "Fetching weather for ({:.4}, {:.4})",
            coordinates.latitude, coordinates.longitude
        );

        let url = format!(
            "{}?lat={}&lon={}&exclude=minutely,hourly&appid={}&units=imperial",
            self.base_url, coordinates.latitude, coordinates.longitude, self.api_key
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Weather request failed: {}", e);
            BeachDayError::weather_fetch_failed(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<onecall::ErrorBody>()
                .await
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!("Weather API returned {}: {}", status, message);
            return Err(BeachDayError::weather_fetch_failed(message));
        }

        let payload: onecall::OneCallResponse = response
            .json()
            .await
            .map_err(|e| BeachDayError::malformed(format!("one-call payload: {e}")))?;

        let observations = observations_from(payload)?;
        info!(
            "Retrieved weather for ({:.4}, {:.4}): today '{}', tomorrow '{}'",
            coordinates.latitude,
            coordinates.longitude,
            observations.0.description,
            observations.1.description
        );

        Ok(observations)
    }
}

/// Extract the (today, tomorrow) observations from a parsed one-call payload
fn observations_from(
    payload: onecall::OneCallResponse,
) -> Result<(WeatherObservation, WeatherObservation)> {
    let current = payload
        .current
        .ok_or_else(|| BeachDayError::malformed("missing current conditions block"))?;

    let current_description = current
        .weather
        .into_iter()
        .next()
        .map(|condition| condition.description)
        .ok_or_else(|| BeachDayError::malformed("current block has no weather description"))?;

    // daily[0] is today's own forecast summary; it only contributes the
    // precipitation probability the current block lacks.
    let mut daily = payload.daily.into_iter();
    let today_forecast = daily
        .next()
        .ok_or_else(|| BeachDayError::malformed("daily forecast array is empty"))?;
    let tomorrow_forecast = daily
        .next()
        .ok_or_else(|| BeachDayError::malformed("daily forecast has no next-day entry"))?;

    let today = WeatherObservation {
        description: current_description,
        temperature: current.temp,
        feels_like: current.feels_like,
        humidity: current.humidity,
        wind_speed: current.wind_speed,
        uv_index: current.uvi,
        precipitation_probability: today_forecast.pop * 100.0,
    };

    let tomorrow_description = tomorrow_forecast
        .weather
        .into_iter()
        .next()
        .map(|condition| condition.description)
        .ok_or_else(|| BeachDayError::malformed("next-day forecast has no weather description"))?;

    let tomorrow = WeatherObservation {
        description: tomorrow_description,
        temperature: tomorrow_forecast.temp.day,
        feels_like: tomorrow_forecast.feels_like.day,
        humidity: tomorrow_forecast.humidity,
        wind_speed: tomorrow_forecast.wind_speed,
        uv_index: tomorrow_forecast.uvi,
        precipitation_probability: tomorrow_forecast.pop * 100.0,
    };

    Ok((today, tomorrow))
}

/// One-call API response structures, trimmed to the fields we extract
mod onecall {
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct OneCallResponse {
        pub current: Option<CurrentConditions>,
        #[serde(default)]
        pub daily: Vec<DailyForecast>,
    }

    #[derive(Debug, Deserialize)]
    pub struct CurrentConditions {
        pub temp: f64,
        pub feels_like: f64,
        pub humidity: f64,
        pub wind_speed: f64,
        pub uvi: f64,
        #[serde(default)]
        pub weather: Vec<Condition>,
    }

    #[derive(Debug, Deserialize)]
    pub struct DailyForecast {
        pub temp: DailyTemperature,
        pub feels_like: DailyTemperature,
        pub humidity: f64,
        pub wind_speed: f64,
        pub uvi: f64,
        pub pop: f64,
        #[serde(default)]
        pub weather: Vec<Condition>,
    }

    /// Daily blocks report per-daypart values; only the daytime one is used
    #[derive(Debug, Deserialize)]
    pub struct DailyTemperature {
        pub day: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Condition {
        pub description: String,
    }

    /// Error body returned by the weather API on non-200 responses
    #[derive(Debug, Deserialize)]
    pub struct ErrorBody {
        pub message: Option<String>,
    }
}
