//! `aromecast` - Hourly Météo-France AROME forecast preview
//!
//! This library resolves a French city name to coordinates, fetches one day
//! of hourly forecast data from the Open-Meteo AROME model, and shapes it
//! into display-ready views: current-condition metrics, a temperature
//! series, and an hour-by-hour table.

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
pub mod resolver;

// Re-export core types for public API
pub use api::MeteoApiClient;
pub use config::AromecastConfig;
pub use error::AromecastError;
pub use models::{Condition, DisplayRow, ForecastPayload, Location};
pub use render::{ChartPoint, PreviewService, RenderResult, TableRow};
pub use resolver::LocationResolver;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, AromecastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
