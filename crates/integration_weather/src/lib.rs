//! Weather Underground PWS integration
//!
//! Client for the Weather Underground personal weather station
//! observations API (<https://api.weather.com/v2/pws>). Requires an
//! API key and a station id; always requests metric units.

pub mod client;
mod models;

pub use client::{WuClient, WuConfig, WeatherError};
pub use models::{MetricValues, PwsObservation, PwsResponse};
