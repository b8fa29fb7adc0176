//! Beach day report orchestration
//!
//! Runs the four stages for one query — ZIP lookup, geocoding, weather
//! fetch, evaluation — strictly in order, stopping at the first failure and
//! surfacing that stage's error verbatim.

use crate::config::BeachDayConfig;
use crate::models::{LocationQuery, WeatherObservation};
use crate::{BeachDayError, GeoClient, Result, WeatherClient, rating, zipcode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Evaluated outlook for a single day
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DayOutlook {
    /// Fixed six-line weather summary
    pub summary: String,
    /// UV index danger label, prefixed with the numeric value
    pub uv_warning: String,
    /// Number of satisfied beach-day criteria (0-5)
    pub score: u8,
    /// Star glyph rendering of the score
    pub stars: String,
    /// Verdict line ("Yay beach day today!", ...)
    pub verdict: String,
}

impl DayOutlook {
    /// Evaluate an observation; `day` is "today" or "tomorrow"
    fn from_observation(obs: &WeatherObservation, day: &str) -> Self {
        let score = rating::beach_day_score(obs);
        Self {
            summary: rating::format_observation(obs),
            uv_warning: rating::uv_warning(obs.uv_index),
            score,
            stars: rating::stars(score),
            verdict: rating::verdict(score, day),
        }
    }
}

/// Complete beach day report for one city/state query
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BeachDayReport {
    /// Normalized city name
    pub city: String,
    /// Normalized state code
    pub state: String,
    /// The ZIP code the weather was fetched for (first dataset candidate)
    pub zip_code: String,
    /// Current-conditions outlook
    pub today: DayOutlook,
    /// Next-day outlook
    pub tomorrow: DayOutlook,
}

/// Service sequencing ZIP lookup, geocoding, weather fetch, and evaluation
///
/// Holds no per-request state; one instance can serve many independent
/// requests concurrently.
pub struct BeachDayService {
    geocoder: GeoClient,
    weather: WeatherClient,
}

impl BeachDayService {
    /// Build the service from an explicit configuration struct
    pub fn new(config: &BeachDayConfig) -> Result<Self> {
        Ok(Self {
            geocoder: GeoClient::new(&config.geocoding)?,
            weather: WeatherClient::new(&config.weather)?,
        })
    }

    /// Produce a full report for a raw city/state query
    pub async fn report(&self, city: &str, state: &str) -> Result<BeachDayReport> {
        let query = LocationQuery::new(city, state);
        info!("Building beach day report for {}, {}", query.city, query.state);

        let zip_codes = zipcode::resolve(&query)?;
        let zip_code = zip_codes
            .into_iter()
            .next()
            .ok_or_else(|| BeachDayError::zip_not_found(query.city.clone(), query.state.clone()))?;
        debug!("Using ZIP code {} for {}, {}", zip_code, query.city, query.state);

        let coordinates = self.geocoder.resolve(&zip_code).await?;

        let (today_obs, tomorrow_obs) = self.weather.fetch(&coordinates).await?;

        Ok(BeachDayReport {
            city: query.city,
            state: query.state,
            zip_code,
            today: DayOutlook::from_observation(&today_obs, "today"),
            tomorrow: DayOutlook::from_observation(&tomorrow_obs, "tomorrow"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outlook_from_perfect_observation() {
        let obs = WeatherObservation {
            description: "clear sky".to_string(),
            temperature: 82.0,
            feels_like: 84.0,
            humidity: 40.0,
            wind_speed: 5.0,
            uv_index: 4.0,
            precipitation_probability: 10.0,
        };

        let outlook = DayOutlook::from_observation(&obs, "today");
        assert_eq!(outlook.score, 5);
        assert_eq!(outlook.stars, "⭐⭐⭐⭐⭐");
        assert_eq!(
            outlook.uv_warning,
            "4 - Medium Danger, Some Protection Required"
        );
        assert_eq!(outlook.verdict, "Yay beach day today!");
        assert_eq!(outlook.summary.lines().count(), 6);
    }

    #[test]
    fn test_outlook_verdict_uses_day_suffix() {
        let obs = WeatherObservation {
            description: "heavy rain".to_string(),
            temperature: 60.0,
            feels_like: 58.0,
            humidity: 90.0,
            wind_speed: 20.0,
            uv_index: 1.0,
            precipitation_probability: 95.0,
        };

        let outlook = DayOutlook::from_observation(&obs, "tomorrow");
        assert_eq!(outlook.verdict, "No beach day tomorrow...");
    }
}
