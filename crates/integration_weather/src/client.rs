//! Weather Underground PWS client
//!
//! One GET per invocation against the current-conditions endpoint;
//! no retries, no caching.

use async_trait::async_trait;
use application::{ApplicationError, WeatherPort};
use chrono::Utc;
use domain::{Humidity, WeatherObservation, WindDirection};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};

use crate::models::{PwsObservation, PwsResponse};

/// Weather client errors
#[derive(Debug, Error)]
pub enum WeatherError {
    /// Connection to the weather service failed
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to the weather service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Failed to parse the response body
    #[error("Parse error: {0}")]
    ParseError(String),

    /// A field required for the announcement is absent
    #[error("Missing field in observation: {0}")]
    MissingField(&'static str),

    /// Service is temporarily unavailable
    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Weather Underground client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WuConfig {
    /// Provider API key
    pub api_key: String,

    /// Station to read, e.g. "KXXAAA1"
    pub station_id: String,

    /// API base URL (default: <https://api.weather.com/v2/pws>)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Connection timeout in seconds (default: 30)
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_base_url() -> String {
    "https://api.weather.com/v2/pws".to_string()
}

const fn default_timeout() -> u64 {
    30
}

impl WuConfig {
    /// Configuration with default endpoint and timeout
    pub fn new(api_key: impl Into<String>, station_id: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            station_id: station_id.into(),
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

/// Weather Underground HTTP client
#[derive(Debug)]
pub struct WuClient {
    client: Client,
    config: WuConfig,
}

impl WuClient {
    /// Create a new client with the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    pub fn new(config: WuConfig) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| WeatherError::ConnectionFailed(e.to_string()))?;

        Ok(Self { client, config })
    }

    /// Fetch the station's current observation
    ///
    /// At most one request; every failure is terminal for this run.
    #[instrument(skip(self), fields(station = %self.config.station_id))]
    pub async fn fetch_current(&self) -> Result<WeatherObservation, WeatherError> {
        let url = format!("{}/observations/current", self.config.base_url);

        // Never log the full key
        debug!(
            url = %url,
            key_prefix = %key_prefix(&self.config.api_key),
            "Requesting current conditions"
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("stationId", self.config.station_id.as_str()),
                ("format", "json"),
                ("units", "m"),
                ("numericPrecision", "decimal"),
                ("apiKey", self.config.api_key.as_str()),
            ])
            .send()
            .await
            .map_err(|e| WeatherError::RequestFailed(e.to_string()))?;

        let status = response.status();
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            return Err(WeatherError::RateLimitExceeded);
        }
        if status.is_server_error() {
            return Err(WeatherError::ServiceUnavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(WeatherError::RequestFailed(format!("HTTP {status}")));
        }

        let body: PwsResponse = response
            .json()
            .await
            .map_err(|e| WeatherError::ParseError(e.to_string()))?;

        let observation = body
            .observations
            .into_iter()
            .next()
            .ok_or(WeatherError::MissingField("observations"))?;

        Self::to_domain(observation)
    }

    /// Map a provider report to the domain snapshot
    ///
    /// Temperature, pressure, wind speed, wind direction, and humidity
    /// are all required; the conditions phrase and timestamp are not.
    fn to_domain(obs: PwsObservation) -> Result<WeatherObservation, WeatherError> {
        let metric = obs.metric.as_ref().ok_or(WeatherError::MissingField("metric"))?;

        let temperature_c = metric.temp.ok_or(WeatherError::MissingField("metric.temp"))?;
        let pressure_mb = metric
            .pressure
            .ok_or(WeatherError::MissingField("metric.pressure"))?;
        let wind_speed_kph = metric
            .wind_speed
            .ok_or(WeatherError::MissingField("metric.windSpeed"))?;
        let humidity = obs.humidity.ok_or(WeatherError::MissingField("humidity"))?;
        let winddir = obs.winddir.ok_or(WeatherError::MissingField("winddir"))?;

        Ok(WeatherObservation {
            temperature_c,
            humidity: Humidity::clamped(round_to_u8(humidity)),
            wind_speed_kph,
            wind_direction: WindDirection::from_degrees(round_to_degrees(winddir)),
            pressure_mb,
            conditions: obs.conditions(),
            observed_at: obs.obs_time_utc.unwrap_or_else(Utc::now),
        })
    }
}

#[async_trait]
impl WeatherPort for WuClient {
    async fn current_conditions(&self) -> Result<WeatherObservation, ApplicationError> {
        self.fetch_current()
            .await
            .map_err(|e| ApplicationError::WeatherFetch(e.to_string()))
    }
}

/// First eight characters of the key, for diagnostics
fn key_prefix(key: &str) -> &str {
    let end = key
        .char_indices()
        .nth(8)
        .map_or(key.len(), |(i, _)| i);
    &key[..end]
}

/// Round a percentage-style float into a u8
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_u8(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Round compass degrees into a u16
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn round_to_degrees(value: f64) -> u16 {
    value.round().rem_euclid(360.0) as u16
}

#[cfg(test)]
mod tests {
    use crate::models::MetricValues;

    use super::*;

    fn full_observation() -> PwsObservation {
        PwsObservation {
            station_id: Some("KXXAAA1".to_string()),
            humidity: Some(45.0),
            winddir: Some(315.0),
            wx_phrase_long: Some("Partly Cloudy".to_string()),
            metric: Some(MetricValues {
                temp: Some(22.4),
                pressure: Some(1019.3),
                wind_speed: Some(5.0),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn config_defaults() {
        let config = WuConfig::new("k", "KXXAAA1");
        assert_eq!(config.base_url, "https://api.weather.com/v2/pws");
        assert_eq!(config.timeout_secs, 30);
    }

    #[test]
    fn client_creation() {
        assert!(WuClient::new(WuConfig::new("k", "KXXAAA1")).is_ok());
    }

    #[test]
    fn to_domain_maps_all_fields() {
        let obs = WuClient::to_domain(full_observation()).expect("should map");

        assert!((obs.temperature_c - 22.4).abs() < f64::EPSILON);
        assert_eq!(obs.humidity.value(), 45);
        assert_eq!(obs.wind_direction.cardinal(), "NW");
        assert!((obs.pressure_mb - 1019.3).abs() < f64::EPSILON);
        assert_eq!(obs.conditions.as_deref(), Some("Partly Cloudy"));
    }

    #[test]
    fn to_domain_requires_each_metric_field() {
        let mut obs = full_observation();
        obs.metric = None;
        assert!(matches!(
            WuClient::to_domain(obs),
            Err(WeatherError::MissingField("metric"))
        ));

        let mut obs = full_observation();
        if let Some(metric) = obs.metric.as_mut() {
            metric.temp = None;
        }
        assert!(matches!(
            WuClient::to_domain(obs),
            Err(WeatherError::MissingField("metric.temp"))
        ));

        let mut obs = full_observation();
        if let Some(metric) = obs.metric.as_mut() {
            metric.wind_speed = None;
        }
        assert!(matches!(
            WuClient::to_domain(obs),
            Err(WeatherError::MissingField("metric.windSpeed"))
        ));
    }

    #[test]
    fn to_domain_requires_humidity_and_winddir() {
        let mut obs = full_observation();
        obs.humidity = None;
        assert!(matches!(
            WuClient::to_domain(obs),
            Err(WeatherError::MissingField("humidity"))
        ));

        let mut obs = full_observation();
        obs.winddir = None;
        assert!(matches!(
            WuClient::to_domain(obs),
            Err(WeatherError::MissingField("winddir"))
        ));
    }

    #[test]
    fn to_domain_tolerates_missing_phrase_and_time() {
        let mut obs = full_observation();
        obs.wx_phrase_long = None;
        obs.obs_time_utc = None;

        let mapped = WuClient::to_domain(obs).expect("optional fields may be absent");
        assert_eq!(mapped.conditions, None);
    }

    #[test]
    fn saturated_humidity_is_clamped() {
        let mut obs = full_observation();
        obs.humidity = Some(101.8);

        let mapped = WuClient::to_domain(obs).expect("should map");
        assert_eq!(mapped.humidity.value(), 100);
    }

    #[test]
    fn key_prefix_is_bounded() {
        assert_eq!(key_prefix("0123456789abcdef"), "01234567");
        assert_eq!(key_prefix("short"), "short");
        assert_eq!(key_prefix(""), "");
    }

    #[test]
    fn degrees_are_rounded_and_wrapped() {
        assert_eq!(round_to_degrees(314.7), 315);
        assert_eq!(round_to_degrees(359.6), 0);
        assert_eq!(round_to_degrees(-45.0), 315);
    }
}
