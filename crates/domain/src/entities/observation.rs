//! Current-conditions snapshot from a personal weather station

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::value_objects::{Humidity, WindDirection};

/// A single weather observation in metric units
///
/// Read-only snapshot of one station report. Constructed once per run
/// from the provider response and consumed by the announcement
/// formatter; never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    /// Air temperature in degrees Celsius
    pub temperature_c: f64,

    /// Relative humidity
    pub humidity: Humidity,

    /// Wind speed in kilometers per hour
    pub wind_speed_kph: f64,

    /// Direction the wind blows from
    pub wind_direction: WindDirection,

    /// Barometric pressure in millibars
    pub pressure_mb: f64,

    /// Provider's textual sky/weather phrase, when reported
    pub conditions: Option<String>,

    /// Time the station took the reading
    pub observed_at: DateTime<Utc>,
}

impl WeatherObservation {
    /// The conditions phrase, or "Unknown" when the station omits one
    #[must_use]
    pub fn conditions_phrase(&self) -> &str {
        self.conditions.as_deref().unwrap_or("Unknown")
    }
}
