//! Location model for geocoded places

use serde::{Deserialize, Serialize};

/// A place resolved from a free-text city name
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// Location name (city)
    pub name: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// First-level administrative region (e.g. "Île-de-France")
    pub region: Option<String>,
    /// Country name
    pub country: Option<String>,
}

impl Location {
    /// Create a new location without region or country metadata
    #[must_use]
    pub fn new(name: String, latitude: f64, longitude: f64) -> Self {
        Self {
            name,
            latitude,
            longitude,
            region: None,
            country: None,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }

    /// One-line confirmation banner, e.g. "Paris (Île-de-France, France)"
    #[must_use]
    pub fn banner_label(&self) -> String {
        let detail: Vec<&str> = [self.region.as_deref(), self.country.as_deref()]
            .into_iter()
            .flatten()
            .collect();

        if detail.is_empty() {
            self.name.clone()
        } else {
            format!("{} ({})", self.name, detail.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_label_with_region_and_country() {
        let location = Location {
            name: "Paris".to_string(),
            latitude: 48.8566,
            longitude: 2.3522,
            region: Some("Île-de-France".to_string()),
            country: Some("France".to_string()),
        };
        assert_eq!(location.banner_label(), "Paris (Île-de-France, France)");
    }

    #[test]
    fn test_banner_label_bare() {
        let location = Location::new("Paris".to_string(), 48.8566, 2.3522);
        assert_eq!(location.banner_label(), "Paris");
    }

    #[test]
    fn test_banner_label_country_only() {
        let mut location = Location::new("Paris".to_string(), 48.8566, 2.3522);
        location.country = Some("France".to_string());
        assert_eq!(location.banner_label(), "Paris (France)");
    }

    #[test]
    fn test_format_coordinates() {
        let location = Location::new("Paris".to_string(), 48.8566, 2.3522);
        assert_eq!(location.format_coordinates(), "48.8566, 2.3522");
    }
}
