//! Weather data port
//!
//! Defines the interface for retrieving the current observation from
//! the configured weather station.

use async_trait::async_trait;
use domain::WeatherObservation;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for fetching the current conditions of one weather station
///
/// Implementations make exactly one request per call; there is no
/// retry or caching behind this interface.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherPort: Send + Sync {
    /// Fetch the station's current observation
    async fn current_conditions(&self) -> Result<WeatherObservation, ApplicationError>;
}
