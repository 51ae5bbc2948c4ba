//! Domain entities

mod observation;

pub use observation::WeatherObservation;
