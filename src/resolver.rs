//! City-name resolution on top of the geocoding client

use tracing::debug;

use crate::api::MeteoApiClient;
use crate::error::AromecastError;
use crate::models::Location;
use crate::Result;

/// Service for resolving a free-text city name to a location
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a city name to its best-match location
    ///
    /// Returns [`AromecastError::CityNotFound`] when the geocoding service
    /// answers with no candidates; network failures keep their own variant
    /// so callers can tell the two apart.
    pub async fn resolve_city(client: &MeteoApiClient, city_name: &str) -> Result<Location> {
        let city_name = Self::normalize(city_name)?;
        debug!("Resolving city name: {}", city_name);

        let candidates = client.geocode(city_name).await?;
        let location = candidates
            .into_iter()
            .next()
            .ok_or_else(|| AromecastError::city_not_found(city_name))?;

        debug!(
            "Resolved '{}' to {} at ({})",
            city_name,
            location.name,
            location.format_coordinates()
        );

        Ok(location)
    }

    /// Trim the input and reject empty names
    fn normalize(city_name: &str) -> Result<&str> {
        let trimmed = city_name.trim();
        if trimmed.is_empty() {
            return Err(AromecastError::validation("City name cannot be empty"));
        }
        Ok(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_whitespace() {
        assert_eq!(LocationResolver::normalize("  Paris  ").unwrap(), "Paris");
    }

    #[test]
    fn test_normalize_rejects_empty_input() {
        let result = LocationResolver::normalize("   ");
        assert!(matches!(
            result,
            Err(AromecastError::Validation { .. })
        ));
    }
}
