//! HTTP client for the Open-Meteo geocoding and forecast services
//!
//! Both endpoints are key-free. The forecast request is pinned to a single
//! named high-resolution model and a single forecast day; the geocoding
//! request asks for exactly one candidate in the configured language.

use reqwest::Client;
use tracing::{debug, info, instrument, warn};

use crate::config::AromecastConfig;
use crate::error::AromecastError;
use crate::models::{ForecastPayload, Location, openmeteo};
use crate::Result;

/// Hourly fields requested from the forecast endpoint
const HOURLY_FIELDS: &str = "temperature_2m,relative_humidity_2m,weather_code,precipitation";

/// Client for the Open-Meteo geocoding and forecast APIs
#[derive(Debug, Clone)]
pub struct MeteoApiClient {
    /// HTTP client
    client: Client,
    /// API configuration
    config: AromecastConfig,
}

impl MeteoApiClient {
    /// Create a new API client from the application configuration
    pub fn new(config: AromecastConfig) -> Result<Self> {
        let timeout = std::time::Duration::from_secs(config.forecast.timeout_seconds.into());

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("aromecast/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { client, config })
    }

    /// Create a new client with default configuration
    pub fn with_defaults() -> Result<Self> {
        Self::new(AromecastConfig::default())
    }

    /// Look up geocoding candidates for a city name
    ///
    /// Returns at most one candidate, as requested from the service. An
    /// empty list means the service answered but matched nothing; transport
    /// and HTTP-status failures surface as their own error variants.
    #[instrument(skip(self), fields(city = city_name))]
    pub async fn geocode(&self, city_name: &str) -> Result<Vec<Location>> {
        let url = format!(
            "{}/search?name={}&count=1&language={}&format=json",
            self.config.forecast.geocoding_base_url,
            urlencoding::encode(city_name),
            self.config.defaults.language,
        );

        debug!(url = %url, "Geocoding request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Geocoding request rejected");
            return Err(AromecastError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: openmeteo::GeocodingResponse = response.json().await?;

        let candidates: Vec<Location> = body
            .results
            .unwrap_or_default()
            .into_iter()
            .map(Location::from)
            .collect();

        if candidates.is_empty() {
            info!("No geocoding results for '{}'", city_name);
        } else {
            debug!(
                "Geocoded '{}' to {} ({})",
                city_name,
                candidates[0].name,
                candidates[0].format_coordinates()
            );
        }

        Ok(candidates)
    }

    /// Fetch one day of hourly forecast data for the given coordinates
    ///
    /// The response body is returned verbatim; whether it actually carries
    /// the hourly series is checked by the presentation shaper, not here.
    #[instrument(skip(self), fields(lat = %latitude, lon = %longitude))]
    pub async fn fetch_forecast(&self, latitude: f64, longitude: f64) -> Result<ForecastPayload> {
        let url = format!(
            "{}/forecast?latitude={}&longitude={}&hourly={}&timezone=auto&forecast_days=1&models={}",
            self.config.forecast.base_url,
            latitude,
            longitude,
            HOURLY_FIELDS,
            self.config.forecast.model,
        );

        debug!(url = %url, "Forecast request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Forecast request rejected");
            return Err(AromecastError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let raw = response.text().await?;
        info!("Received forecast payload ({} bytes)", raw.len());

        Ok(ForecastPayload::new(raw))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = MeteoApiClient::with_defaults();
        assert!(client.is_ok());
    }

    #[test]
    fn test_hourly_fields_match_display_columns() {
        // The four value series the shaper zips must all be requested.
        for field in [
            "temperature_2m",
            "relative_humidity_2m",
            "weather_code",
            "precipitation",
        ] {
            assert!(HOURLY_FIELDS.contains(field));
        }
    }
}
