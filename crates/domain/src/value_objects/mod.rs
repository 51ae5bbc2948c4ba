//! Value Objects - Immutable, identity-less domain primitives

mod humidity;
mod node_id;
mod wind_direction;

pub use humidity::{Humidity, InvalidHumidity};
pub use node_id::{InvalidNodeId, NodeId};
pub use wind_direction::WindDirection;
