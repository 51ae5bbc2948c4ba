//! Serde models for the Weather Underground PWS observations response
//!
//! Field names mirror the provider's JSON. Every value is optional at
//! the wire level; the client decides which absences are fatal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Top-level response of `/observations/current`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PwsResponse {
    /// Station reports; the current-conditions endpoint returns at
    /// most one
    #[serde(default)]
    pub observations: Vec<PwsObservation>,
}

/// One station report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PwsObservation {
    /// Reporting station id, e.g. "KXXAAA1"
    #[serde(rename = "stationID")]
    pub station_id: Option<String>,

    /// Observation time in UTC
    pub obs_time_utc: Option<DateTime<Utc>>,

    /// Relative humidity in percent; decimal precision is requested,
    /// so this arrives as a float
    pub humidity: Option<f64>,

    /// Direction the wind blows from, compass degrees
    pub winddir: Option<f64>,

    /// Long sky/weather phrase ("Partly Cloudy")
    pub wx_phrase_long: Option<String>,

    /// Medium phrase, present on some station tiers
    pub wx_phrase: Option<String>,

    /// Short phrase fallback
    pub wx_phrase_short: Option<String>,

    /// Metric-unit block (requested with `units=m`)
    pub metric: Option<MetricValues>,
}

impl PwsObservation {
    /// The best available conditions phrase, longest first
    #[must_use]
    pub fn conditions(&self) -> Option<String> {
        self.wx_phrase_long
            .clone()
            .or_else(|| self.wx_phrase.clone())
            .or_else(|| self.wx_phrase_short.clone())
    }
}

/// Metric measurements of one report
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetricValues {
    /// Air temperature in degrees Celsius
    pub temp: Option<f64>,

    /// Barometric pressure in millibars
    pub pressure: Option<f64>,

    /// Wind speed in km/h
    pub wind_speed: Option<f64>,
}
