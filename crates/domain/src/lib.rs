//! Domain layer for wx-announce
//!
//! Contains the weather observation snapshot and its value objects.
//! This layer has no I/O and no knowledge of the weather provider or
//! the radio-link management service.

pub mod entities;
pub mod value_objects;

pub use entities::WeatherObservation;
pub use value_objects::{Humidity, InvalidHumidity, InvalidNodeId, NodeId, WindDirection};
