//! Port definitions for the application layer
//!
//! Ports are interfaces that define how the application interacts with
//! external systems. The integration crates implement these ports.

mod announce_port;
mod weather_port;

#[cfg(test)]
pub use announce_port::MockAnnouncePort;
pub use announce_port::AnnouncePort;
#[cfg(test)]
pub use weather_port::MockWeatherPort;
pub use weather_port::WeatherPort;
