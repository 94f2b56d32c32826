//! `Open-Meteo` API response structures and conversion utilities

use serde::Deserialize;

use super::Location;

/// Geocoding response from `Open-Meteo`
#[derive(Debug, Deserialize)]
pub struct GeocodingResponse {
    /// Candidate list; absent entirely when nothing matched
    pub results: Option<Vec<GeocodingResult>>,
}

/// Single geocoding candidate
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingResult {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub country: Option<String>,
    pub admin1: Option<String>,
}

impl From<GeocodingResult> for Location {
    fn from(result: GeocodingResult) -> Self {
        Self {
            name: result.name,
            latitude: result.latitude,
            longitude: result.longitude,
            region: result.admin1,
            country: result.country,
        }
    }
}

/// Forecast response from `Open-Meteo`
///
/// Every field is optional: an error body such as `{}` or `{"reason": ...}`
/// must still deserialize so the missing hourly series can be reported with
/// the raw payload attached.
#[derive(Debug, Deserialize)]
pub struct ForecastResponse {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub timezone: Option<String>,
    pub hourly: Option<HourlyData>,
}

/// Hourly weather series from `Open-Meteo`
///
/// Parallel arrays, indexed by hour of day.
#[derive(Debug, Deserialize)]
pub struct HourlyData {
    pub time: Vec<String>,
    #[serde(rename = "temperature_2m")]
    pub temperature: Vec<f32>,
    #[serde(rename = "relative_humidity_2m")]
    pub relative_humidity: Vec<u8>,
    pub weather_code: Vec<u8>,
    pub precipitation: Vec<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_geocoding_result_into_location() {
        let result = GeocodingResult {
            name: "Paris".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
            country: Some("France".to_string()),
            admin1: Some("Île-de-France".to_string()),
        };

        let location: Location = result.into();
        assert_eq!(location.name, "Paris");
        assert_eq!(location.region.as_deref(), Some("Île-de-France"));
        assert_eq!(location.country.as_deref(), Some("France"));
    }

    #[test]
    fn test_geocoding_response_without_results() {
        let response: GeocodingResponse = serde_json::from_str("{}").expect("should parse");
        assert!(response.results.is_none());
    }

    #[test]
    fn test_forecast_response_empty_body_parses() {
        let response: ForecastResponse = serde_json::from_str("{}").expect("should parse");
        assert!(response.hourly.is_none());
    }

    #[test]
    fn test_forecast_response_with_hourly() {
        let body = r#"{
            "latitude": 48.86,
            "longitude": 2.35,
            "timezone": "Europe/Paris",
            "hourly": {
                "time": ["2026-08-07T00:00", "2026-08-07T01:00"],
                "temperature_2m": [17.2, 16.8],
                "relative_humidity_2m": [82, 85],
                "weather_code": [0, 3],
                "precipitation": [0.0, 0.1]
            }
        }"#;

        let response: ForecastResponse = serde_json::from_str(body).expect("should parse");
        let hourly = response.hourly.expect("hourly present");
        assert_eq!(hourly.time.len(), 2);
        assert_eq!(hourly.weather_code, vec![0, 3]);
        assert_eq!(hourly.relative_humidity, vec![82, 85]);
    }
}
