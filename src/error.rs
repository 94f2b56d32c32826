//! Error types and handling for the `aromecast` application

use thiserror::Error;

/// Main error type for the `aromecast` application
#[derive(Error, Debug)]
pub enum AromecastError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Network-level failures talking to the Open-Meteo services
    #[error("Transport error: {source}")]
    Transport {
        #[from]
        source: reqwest::Error,
    },

    /// The upstream service answered with a non-success HTTP status
    #[error("Upstream returned HTTP {status}")]
    UpstreamStatus { status: u16 },

    /// The geocoding service returned no candidate for the query
    #[error("No location found for '{query}'")]
    CityNotFound { query: String },

    /// The forecast body lacked the expected hourly series
    #[error("Malformed forecast payload: missing hourly series")]
    MalformedForecast {
        /// Verbatim response body, kept for diagnostics
        raw: String,
    },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl AromecastError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a not-found error for a geocoding query
    pub fn city_not_found<S: Into<String>>(query: S) -> Self {
        Self::CityNotFound {
            query: query.into(),
        }
    }

    /// Create a malformed-payload error carrying the raw body
    pub fn malformed_forecast<S: Into<String>>(raw: S) -> Self {
        Self::MalformedForecast { raw: raw.into() }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AromecastError::Config { .. } => {
                "Configuration error. Please check your config file.".to_string()
            }
            AromecastError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            AromecastError::Transport { .. } | AromecastError::UpstreamStatus { .. } => {
                "Unable to reach the Open-Meteo services. Please check your internet connection."
                    .to_string()
            }
            AromecastError::CityNotFound { query } => {
                format!("City '{query}' not found. Please check the spelling.")
            }
            AromecastError::MalformedForecast { raw } => {
                format!(
                    "Could not retrieve forecast data. The API might be busy or the model \
                     name is incorrect. Raw response: {raw}"
                )
            }
            AromecastError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let config_err = AromecastError::config("missing base URL");
        assert!(matches!(config_err, AromecastError::Config { .. }));

        let validation_err = AromecastError::validation("city name is empty");
        assert!(matches!(validation_err, AromecastError::Validation { .. }));

        let not_found = AromecastError::city_not_found("Zzqqx");
        assert!(matches!(not_found, AromecastError::CityNotFound { .. }));
    }

    #[test]
    fn test_user_messages() {
        let config_err = AromecastError::config("test");
        assert!(config_err.user_message().contains("Configuration error"));

        let not_found = AromecastError::city_not_found("Zzqqx");
        assert!(not_found.user_message().contains("Zzqqx"));
        assert!(not_found.user_message().contains("spelling"));

        let malformed = AromecastError::malformed_forecast("{}");
        assert!(malformed.user_message().contains("{}"));
    }

    #[test]
    fn test_not_found_distinct_from_transport() {
        // "No match" and transport failure must stay separate variants.
        let not_found = AromecastError::city_not_found("Paris");
        assert!(!matches!(not_found, AromecastError::Transport { .. }));
        assert!(!matches!(not_found, AromecastError::UpstreamStatus { .. }));
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let app_err: AromecastError = io_err.into();
        assert!(matches!(app_err, AromecastError::Io { .. }));
    }
}
