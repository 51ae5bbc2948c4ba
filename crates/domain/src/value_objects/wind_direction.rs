//! Wind direction value object
//!
//! Stores the direction the wind blows from in compass degrees and
//! reduces it to one of the eight principal winds for spoken output.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wind direction in compass degrees (0-359, 0 = north)
///
/// The constructor normalizes any degree value modulo 360, so sensor
/// readings of exactly 360 map back to north.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WindDirection(u16);

impl WindDirection {
    /// Create a wind direction from compass degrees
    #[must_use]
    pub const fn from_degrees(degrees: u16) -> Self {
        Self(degrees % 360)
    }

    /// The direction in degrees (0-359)
    #[must_use]
    pub const fn degrees(self) -> u16 {
        self.0
    }

    /// The nearest of the eight principal winds
    ///
    /// Sector boundaries sit halfway between adjacent winds, so north
    /// covers [337.5, 360) and [0, 22.5).
    #[must_use]
    pub const fn cardinal(self) -> &'static str {
        // Shift by half a sector (22.5 deg) so each wind owns one
        // 45-degree band; work in tenths of a degree to stay integral.
        let shifted = (self.0 as u32 * 10 + 225) % 3600;
        match shifted / 450 {
            0 => "N",
            1 => "NE",
            2 => "E",
            3 => "SE",
            4 => "S",
            5 => "SW",
            6 => "W",
            _ => "NW",
        }
    }
}

impl fmt::Display for WindDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.cardinal())
    }
}

impl From<u16> for WindDirection {
    fn from(degrees: u16) -> Self {
        Self::from_degrees(degrees)
    }
}
