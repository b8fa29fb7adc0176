//! Geocoding client: resolves a ZIP code to latitude/longitude
//!
//! Talks to an OpenCage-style forward geocoding endpoint. Transport
//! failures, non-200 responses, and empty result sets all degrade to the
//! same [`BeachDayError::GeoLookupFailed`] so the caller surfaces one
//! message per failed ZIP code.

use crate::config::GeocodingConfig;
use crate::models::Coordinates;
use crate::{BeachDayError, Result};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

/// HTTP client for the geocoding API
#[derive(Debug, Clone)]
pub struct GeoClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl GeoClient {
    /// Create a new geocoding client from configuration
    pub fn new(config: &GeocodingConfig) -> Result<Self> {
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

    /// Resolve a ZIP code to coordinates, taking the first geocoding result
    pub async fn resolve(&self, zip_code: &str) -> Result<Coordinates> {
        debug!("Geocoding ZIP code {}", zip_code);

        let url = format!(
            "{}?q={}&key={}",
            self.base_url,
            urlencoding::encode(zip_code),
            self.api_key
        );

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!("Geocoding request for ZIP {} failed: {}", zip_code, e);
            BeachDayError::geo_lookup_failed(zip_code)
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!("Geocoding API returned {} for ZIP {}", status, zip_code);
            return Err(BeachDayError::geo_lookup_failed(zip_code));
        }

        let payload: GeocodingResponse = response
            .json()
            .await
            .map_err(|e| BeachDayError::malformed(format!("geocoding payload: {e}")))?;

        let Some(first) = payload.results.into_iter().next() else {
            warn!("Geocoding API returned no results for ZIP {}", zip_code);
            return Err(BeachDayError::geo_lookup_failed(zip_code));
        };

        let coordinates = Coordinates {
            latitude: first.geometry.lat,
            longitude: first.geometry.lng,
        };

        info!(
            "Resolved ZIP {} to ({:.4}, {:.4})",
            zip_code, coordinates.latitude, coordinates.longitude
        );

        Ok(coordinates)
    }
}

/// Geocoding API response, trimmed to the fields we extract
#[derive(Debug, Deserialize)]
struct GeocodingResponse {
    #[serde(default)]
    results: Vec<GeocodingResult>,
}

#[derive(Debug, Deserialize)]
struct GeocodingResult {
    geometry: Geometry,
}

#[derive(Debug, Deserialize)]
struct Geometry {
    lat: f64,
    lng: f64,
}
