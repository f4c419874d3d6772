//! Units of measurement.
//!
//! The length unit of a compute request drives both the grid spacing and the
//! native illuminance unit of the point-source law: candela over square feet
//! yields footcandles, candela over square meters yields lux.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// One footcandle expressed in lux.
pub const FC_TO_LUX: f64 = 10.7639;

/// The length units in which the request geometry is expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LengthUnits {
    #[serde(rename = "ft")]
    Feet,
    #[serde(rename = "m")]
    Meters,
}

impl Default for LengthUnits {
    fn default() -> Self {
        LengthUnits::Feet
    }
}

impl LengthUnits {
    /// The illuminance unit the point-source law natively produces for this
    /// length unit.
    pub fn native_illuminance(&self) -> IlluminanceUnits {
        match self {
            LengthUnits::Feet => IlluminanceUnits::Footcandles,
            LengthUnits::Meters => IlluminanceUnits::Lux,
        }
    }

    /// The distance walked along a contour polyline between successive labels.
    pub fn label_interval(&self) -> f64 {
        match self {
            LengthUnits::Feet => 40.0,
            LengthUnits::Meters => 12.0,
        }
    }
}

impl Display for LengthUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                LengthUnits::Feet => "ft",
                LengthUnits::Meters => "m",
            }
        )
    }
}

/// The illuminance units in which results are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IlluminanceUnits {
    #[serde(rename = "fc")]
    Footcandles,
    #[serde(rename = "lux")]
    Lux,
}

impl Default for IlluminanceUnits {
    fn default() -> Self {
        IlluminanceUnits::Footcandles
    }
}

impl Display for IlluminanceUnits {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                IlluminanceUnits::Footcandles => "fc",
                IlluminanceUnits::Lux => "lux",
            }
        )
    }
}

/// Converts an illuminance value between reporting units.
#[inline]
#[must_use]
pub fn convert_illuminance(value: f64, from: IlluminanceUnits, to: IlluminanceUnits) -> f64 {
    match (from, to) {
        (IlluminanceUnits::Footcandles, IlluminanceUnits::Lux) => value * FC_TO_LUX,
        (IlluminanceUnits::Lux, IlluminanceUnits::Footcandles) => value / FC_TO_LUX,
        _ => value,
    }
}
