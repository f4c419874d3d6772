use crate::units::{IlluminanceUnits, LengthUnits};
use serde::{Deserialize, Serialize};

/// The bounding box of the calculation grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Extents {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

/// A suggested scale-bar length for rendering, purely advisory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleBar {
    pub length: f64,
    pub label: String,
}

impl ScaleBar {
    /// The conventional suggestion for each unit system.
    pub fn for_units(units: LengthUnits) -> ScaleBar {
        match units {
            LengthUnits::Feet => ScaleBar {
                length: 50.0,
                label: "50'".to_string(),
            },
            LengthUnits::Meters => ScaleBar {
                length: 15.0,
                label: "15m".to_string(),
            },
        }
    }
}

/// A sparse label anchored to a contour vertex.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsoLabel {
    pub x: f64,
    pub y: f64,
    pub text: String,
}

/// The extracted contours for one requested iso level.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IsoLevelResult {
    pub value: f64,
    pub color: String,
    /// Ordered vertex runs; closed loops repeat their first vertex.
    pub paths: Vec<Vec<[f64; 2]>>,
    pub labels: Vec<IsoLabel>,
}

/// The assembled output of a compute request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComputeResult {
    pub units: LengthUnits,
    pub illuminance_units: IlluminanceUnits,
    pub mounting_height: f64,
    pub calc_plane_height: f64,
    pub radius: f64,
    pub extents: Extents,
    pub scale_bar: ScaleBar,
    pub levels: Vec<IsoLevelResult>,
}
