//! Forecast payload and display-row models

use chrono::{NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

use super::Condition;

/// Verbatim forecast response body as returned by the forecast endpoint
///
/// The fetch layer performs no structural validation; whether the body
/// actually carries an hourly series is decided when the rows are shaped,
/// and the raw text sticks around so a malformed payload can be reported
/// with full diagnostics.
#[derive(Debug, Clone)]
pub struct ForecastPayload {
    /// Raw response text
    pub raw: String,
}

impl ForecastPayload {
    #[must_use]
    pub fn new(raw: String) -> Self {
        Self { raw }
    }
}

/// One hour of display-ready forecast values
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Forecast hour in the location's local time
    pub time: NaiveDateTime,
    /// WMO weather code as delivered by the model
    pub weather_code: u8,
    /// Condition derived from the weather code
    pub condition: Condition,
    /// Temperature in °C
    pub temperature: f32,
    /// Precipitation in mm
    pub precipitation: f32,
    /// Relative humidity percentage (0-100)
    pub humidity: u8,
}

impl DisplayRow {
    /// Hour-of-day of this row (0-23)
    #[must_use]
    pub fn hour(&self) -> u32 {
        self.time.hour()
    }

    /// Table time column, formatted as HH:MM
    #[must_use]
    pub fn format_time(&self) -> String {
        self.time.format("%H:%M").to_string()
    }

    /// Metric formatting for temperature
    #[must_use]
    pub fn format_temperature(&self) -> String {
        format!("{:.1}°C", self.temperature)
    }

    /// Metric formatting for precipitation
    #[must_use]
    pub fn format_precipitation(&self) -> String {
        format!("{:.1} mm", self.precipitation)
    }
}
