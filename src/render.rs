//! Presentation shaping: hourly rows, current snapshot, chart and table views
//!
//! This module turns a verbatim forecast payload into display-ready data and
//! drives the whole resolve, fetch, shape pipeline for one city lookup.

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::api::MeteoApiClient;
use crate::error::AromecastError;
use crate::models::{Condition, DisplayRow, ForecastPayload, Location, openmeteo};
use crate::resolver::LocationResolver;
use crate::Result;

/// One point of the chart-ready temperature series
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartPoint {
    /// Forecast hour in local time
    pub time: NaiveDateTime,
    /// Temperature in °C
    pub temperature: f32,
}

/// One row of the table-ready hourly detail view
///
/// The time column is formatted exactly once, when the view is built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableRow {
    /// Hour formatted as HH:MM
    pub time: String,
    /// Condition label with its glyph
    pub condition: String,
    /// Temperature in °C
    pub temperature: f32,
    /// Precipitation in mm
    pub precipitation: f32,
    /// Relative humidity percentage
    pub humidity: u8,
}

/// Everything one city lookup renders
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// Resolved location, for the confirmation banner
    pub location: Location,
    /// Row matching the local wall-clock hour; absent when out of range
    pub current: Option<DisplayRow>,
    /// Chart-ready (time, temperature) series
    pub chart: Vec<ChartPoint>,
    /// Table-ready hourly rows in chronological order
    pub table: Vec<TableRow>,
}

/// Service running the resolve, fetch, shape pipeline
pub struct PreviewService;

impl PreviewService {
    /// Render the hourly preview for a city, using the local wall-clock hour
    /// for the current-conditions snapshot
    pub async fn render_for_city(
        client: &MeteoApiClient,
        city_name: &str,
    ) -> Result<RenderResult> {
        Self::render_for_city_at(client, city_name, Local::now().hour()).await
    }

    /// Render the hourly preview for a city with an explicit snapshot hour
    ///
    /// Each call is an independent run: resolve the city, fetch one day of
    /// hourly data, shape the rows, and derive the display views. No state
    /// survives between calls.
    pub async fn render_for_city_at(
        client: &MeteoApiClient,
        city_name: &str,
        current_hour: u32,
    ) -> Result<RenderResult> {
        info!("Locating '{}'", city_name);
        let location = LocationResolver::resolve_city(client, city_name).await?;

        info!(
            "Fetching AROME data for {} ({})",
            location.name,
            location.format_coordinates()
        );
        let payload = client
            .fetch_forecast(location.latitude, location.longitude)
            .await?;

        debug!("Shaping hourly rows");
        let rows = shape_rows(&payload)?;
        info!("Shaped {} hourly rows", rows.len());

        Ok(build_views(location, &rows, current_hour))
    }
}

/// Zip the raw hourly series into chronological display rows
///
/// Fails with [`AromecastError::MalformedForecast`] when the body is not
/// JSON, lacks the hourly series, or carries unparseable timestamps; the
/// raw body rides along for diagnostics. Sequences of unequal length are
/// zipped to the shortest one.
pub fn shape_rows(payload: &ForecastPayload) -> Result<Vec<DisplayRow>> {
    let parsed: openmeteo::ForecastResponse = serde_json::from_str(&payload.raw)
        .map_err(|_| AromecastError::malformed_forecast(payload.raw.clone()))?;

    let Some(hourly) = parsed.hourly else {
        return Err(AromecastError::malformed_forecast(payload.raw.clone()));
    };

    let len = hourly
        .time
        .len()
        .min(hourly.temperature.len())
        .min(hourly.relative_humidity.len())
        .min(hourly.weather_code.len())
        .min(hourly.precipitation.len());

    if len < hourly.time.len() {
        warn!(
            "Hourly sequences have unequal lengths; truncating to {} rows",
            len
        );
    }

    let mut rows = Vec::with_capacity(len);
    for i in 0..len {
        let time = parse_forecast_time(&hourly.time[i])
            .ok_or_else(|| AromecastError::malformed_forecast(payload.raw.clone()))?;
        let code = hourly.weather_code[i];

        rows.push(DisplayRow {
            time,
            weather_code: code,
            condition: Condition::from_wmo_code(code),
            temperature: hourly.temperature[i],
            precipitation: hourly.precipitation[i],
            humidity: hourly.relative_humidity[i],
        });
    }

    Ok(rows)
}

/// Pick the row matching the wall-clock hour, if the series reaches it
///
/// Out-of-range hours (short series, boundary conditions near midnight)
/// yield `None` rather than an error; the current-conditions section is
/// simply omitted.
#[must_use]
pub fn select_current(rows: &[DisplayRow], current_hour: u32) -> Option<&DisplayRow> {
    rows.get(current_hour as usize)
}

/// Derive the chart, table, and snapshot views from shaped rows
#[must_use]
pub fn build_views(location: Location, rows: &[DisplayRow], current_hour: u32) -> RenderResult {
    let current = select_current(rows, current_hour).cloned();

    let chart = rows
        .iter()
        .map(|row| ChartPoint {
            time: row.time,
            temperature: row.temperature,
        })
        .collect();

    let table = rows
        .iter()
        .map(|row| TableRow {
            time: row.format_time(),
            condition: row.condition.to_string(),
            temperature: row.temperature,
            precipitation: row.precipitation,
            humidity: row.humidity,
        })
        .collect();

    RenderResult {
        location,
        current,
        chart,
        table,
    }
}

impl RenderResult {
    /// Location confirmation banner
    #[must_use]
    pub fn banner(&self) -> String {
        format!("📍 {}", self.location.banner_label())
    }

    /// Current-condition metrics line, when the snapshot exists
    #[must_use]
    pub fn metrics_text(&self) -> Option<String> {
        self.current.as_ref().map(|row| {
            format!(
                "Temperature {}   Sky {}   Rain {}",
                row.format_temperature(),
                row.condition,
                row.format_precipitation()
            )
        })
    }

    /// One-line temperature sparkline over the day, with its range
    #[must_use]
    pub fn temperature_sparkline(&self) -> String {
        const GLYPHS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

        if self.chart.is_empty() {
            return String::new();
        }

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for point in &self.chart {
            min = min.min(point.temperature);
            max = max.max(point.temperature);
        }

        let span = max - min;
        let bars: String = self
            .chart
            .iter()
            .map(|point| {
                if span <= f32::EPSILON {
                    GLYPHS[3]
                } else {
                    let level = ((point.temperature - min) / span * 7.0).round() as usize;
                    GLYPHS[level.min(7)]
                }
            })
            .collect();

        format!("{bars}  min {min:.1}°C, max {max:.1}°C")
    }

    /// Hour-by-hour detail table as fixed-width text
    #[must_use]
    pub fn table_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "{:<6} {:<18} {:>9} {:>9} {:>12}\n",
            "Time", "Condition", "Temp (°C)", "Rain (mm)", "Humidity (%)"
        ));

        for row in &self.table {
            out.push_str(&format!(
                "{:<6} {:<18} {:>9.1} {:>9.1} {:>12}\n",
                row.time, row.condition, row.temperature, row.precipitation, row.humidity
            ));
        }

        out
    }
}

/// Parse a forecast timestamp in the provider's local-time format
fn parse_forecast_time(value: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S"))
        .ok()
}
