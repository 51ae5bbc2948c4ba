//! AllStar node identifier value object

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Error returned when a node identifier is malformed
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("invalid node id: {0:?} (must be a non-empty string of digits)")]
pub struct InvalidNodeId(String);

/// Numeric identifier of a radio-link node on the AllStar network
///
/// Node numbers are digit strings, not integers: leading zeros are
/// significant to the network and must survive round-trips.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct NodeId(String);

impl NodeId {
    /// Create a validated node identifier
    ///
    /// # Errors
    ///
    /// Returns `InvalidNodeId` if the input is empty or contains
    /// non-digit characters.
    pub fn new(id: impl Into<String>) -> Result<Self, InvalidNodeId> {
        let id = id.into();
        if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidNodeId(id));
        }
        Ok(Self(id))
    }

    /// The node number as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for NodeId {
    type Err = InvalidNodeId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

/// Custom deserialization that validates the node id
impl<'de> Deserialize<'de> for NodeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        Self::new(value).map_err(serde::de::Error::custom)
    }
}
